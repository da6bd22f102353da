//! Реестр разделов приложения: ключ, заголовок, иконка и страница списка

use crate::domain::a001_member::ui::list::MemberList;
use crate::domain::a002_chapter::ui::list::ChapterList;
use crate::domain::a003_bdm::ui::list::BdmList;
use crate::domain::a004_business::ui::list::BusinessList;
use crate::domain::a005_referral::ui::list::ReferralList;
use crate::domain::a006_visitor_invite::ui::list::VisitorInviteList;
use crate::domain::a007_schedule::ui::list::ScheduleList;
use crate::domain::a008_creative::ui::list::CreativeList;
use crate::domain::a009_monthly_reward::ui::list::MonthlyRewardList;
use contracts::domain::a004_business::BusinessDirection;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Members,
    Chapters,
    Bdm,
    BusinessGiven,
    BusinessReceived,
    Referrals,
    Visitors,
    Schedules,
    Creatives,
    MonthlyRewards,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Members,
        Section::Chapters,
        Section::Bdm,
        Section::BusinessGiven,
        Section::BusinessReceived,
        Section::Referrals,
        Section::Visitors,
        Section::Schedules,
        Section::Creatives,
        Section::MonthlyRewards,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Members => "members",
            Section::Chapters => "chapters",
            Section::Bdm => "bdm",
            Section::BusinessGiven => "business_given",
            Section::BusinessReceived => "business_received",
            Section::Referrals => "referrals",
            Section::Visitors => "visitors",
            Section::Schedules => "schedules",
            Section::Creatives => "creatives",
            Section::MonthlyRewards => "monthly_rewards",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Members => "Members",
            Section::Chapters => "Chapters",
            Section::Bdm => "BDM",
            Section::BusinessGiven => "Business Given",
            Section::BusinessReceived => "Business Received",
            Section::Referrals => "Referrals",
            Section::Visitors => "Visitor Invites",
            Section::Schedules => "Schedules",
            Section::Creatives => "Creatives",
            Section::MonthlyRewards => "Monthly Rewards",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Members => "users",
            Section::Chapters => "chapters",
            Section::Bdm => "handshake",
            Section::BusinessGiven => "arrow-up-right",
            Section::BusinessReceived => "arrow-down-left",
            Section::Referrals => "share",
            Section::Visitors => "user-plus",
            Section::Schedules => "calendar",
            Section::Creatives => "image",
            Section::MonthlyRewards => "award",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

pub fn render_section(section: Section) -> AnyView {
    match section {
        Section::Members => view! { <MemberList /> }.into_any(),
        Section::Chapters => view! { <ChapterList /> }.into_any(),
        Section::Bdm => view! { <BdmList /> }.into_any(),
        Section::BusinessGiven => {
            view! { <BusinessList direction=BusinessDirection::Given /> }.into_any()
        }
        Section::BusinessReceived => {
            view! { <BusinessList direction=BusinessDirection::Received /> }.into_any()
        }
        Section::Referrals => view! { <ReferralList /> }.into_any(),
        Section::Visitors => view! { <VisitorInviteList /> }.into_any(),
        Section::Schedules => view! { <ScheduleList /> }.into_any(),
        Section::Creatives => view! { <CreativeList /> }.into_any(),
        Section::MonthlyRewards => view! { <MonthlyRewardList /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_resolvable() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("unknown"), None);
    }
}
