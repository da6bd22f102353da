use contracts::domain::a001_member::Member;
use contracts::domain::a009_monthly_reward::MonthlyReward;
use contracts::shared::list_view::{
    list_config, DeleteError, DeleteFlow, DeleteFlowState, ListRecord, ListViewState,
};

fn member(i: usize, chapter: &str, status: &str) -> Member {
    Member {
        id: format!("m{:02}", i),
        name: Some(format!("Member {}", i)),
        email: Some(format!("member{}@example.com", i)),
        mobile: None,
        business_name: Some(format!("{} Traders", chapter)),
        business_category: None,
        chapter_name: Some(chapter.to_string()),
        status: Some(status.to_string()),
        joined_on: None,
    }
}

fn members(total: usize, in_chapter_a: usize) -> Vec<Member> {
    (0..total)
        .map(|i| {
            let chapter = if i < in_chapter_a { "Chapter A" } else { "Chapter B" };
            let status = if i % 3 == 0 { "inactive" } else { "active" };
            member(i, chapter, status)
        })
        .collect()
}

#[test]
fn test_search_scenario_on_members_screen() {
    let mut state = ListViewState::with_records(list_config("members"), members(25, 4));
    let view = state.current_view();
    assert_eq!(view.page_count, 3);
    assert_eq!(view.current_page_items.len(), 10);

    state.set_page(2);
    // businessName is a configured search field and carries the chapter name
    state.set_search_text("chapter a");
    let view = state.current_view();
    assert_eq!(view.total_matched, 4);
    assert_eq!(view.page_count, 1);
    assert_eq!(view.current_page, 1);
}

#[test]
fn test_pages_reassemble_filtered_set() {
    let mut state = ListViewState::with_records(list_config("members"), members(57, 20));
    state.set_exact_filter("status", "active");
    state.set_page_size(7);

    let expected: Vec<String> = state.filtered().iter().map(|m| m.record_id()).collect();
    let page_count = state.current_view().page_count;
    let mut joined = Vec::new();
    for page in 1..=page_count {
        state.set_page(page);
        joined.extend(state.current_view().current_page_items.iter().map(|m| m.record_id()));
    }
    assert_eq!(joined, expected);
}

#[tokio::test]
async fn test_failed_delete_leaves_records_untouched() {
    let mut state = ListViewState::with_records(list_config("members"), members(5, 2));
    let before = state.records().to_vec();
    let mut flow = DeleteFlow::new();

    flow.request_delete("m01").unwrap();
    let result = flow
        .confirm(|_| async { Err::<(), _>("Failed to delete member: 500") })
        .await;

    match result {
        Ok(id) => {
            state.remove_record(&id);
        }
        Err(e) => assert_eq!(e, DeleteError::DeleteFailed("Failed to delete member: 500".into())),
    }
    assert_eq!(state.records(), before.as_slice());
    assert_eq!(flow.state(), &DeleteFlowState::Idle);
}

#[tokio::test]
async fn test_successful_delete_removes_record() {
    let mut state = ListViewState::with_records(list_config("members"), members(11, 2));
    state.set_page(2);
    let mut flow = DeleteFlow::new();

    flow.request_delete("m10").unwrap();
    assert!(flow.request_delete("m03").is_err());

    let id = flow.confirm(|_| async { Ok::<(), String>(()) }).await.unwrap();
    assert!(state.remove_record(&id));

    // the only record of page 2 is gone, the stale page clamps to 1
    let view = state.current_view();
    assert_eq!(view.total_matched, 10);
    assert_eq!(view.current_page, 1);
    assert!(flow.is_idle());
}

#[test]
fn test_reward_screen_filters_by_tier() {
    let rewards: Vec<MonthlyReward> = [10, 30, 55, 80, 76, 29]
        .iter()
        .enumerate()
        .map(|(i, points)| MonthlyReward {
            id: format!("r{}", i),
            member_name: Some(format!("Member {}", i)),
            chapter_name: Some("Chapter A".into()),
            month: Some("2024-03".into()),
            meetings: 0,
            bdm: 0,
            business: 0,
            referrals: 0,
            visitors: 0,
            socials: 0,
            total_points: *points,
        })
        .collect();
    let mut state = ListViewState::with_records(list_config("monthly_rewards"), rewards);
    state.set_exact_filter("tier", "Diamond");
    let ids: Vec<String> = state
        .current_view()
        .current_page_items
        .iter()
        .map(|r| r.record_id())
        .collect();
    assert_eq!(ids, vec!["r3", "r4"]);
}
