use contracts::enums::record_status::badge_variant_for;
use contracts::shared::reward_tier::RewardTier;
use leptos::prelude::*;

fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || variant_class(variant.get().as_deref().unwrap_or("neutral"));
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Статус записи как пришел с сервера; цвет по известным статусам
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: Option<String>,
) -> impl IntoView {
    match status.filter(|s| !s.trim().is_empty()) {
        Some(status) => {
            let class = format!("badge badge--status {}", variant_class(badge_variant_for(&status)));
            view! { <span class=class>{status}</span> }.into_any()
        }
        None => view! { <span class="badge badge--neutral">"-"</span> }.into_any(),
    }
}

pub fn tier_class(tier: RewardTier) -> &'static str {
    match tier {
        RewardTier::Bronze => "badge badge--tier badge--tier-bronze",
        RewardTier::Silver => "badge badge--tier badge--tier-silver",
        RewardTier::Gold => "badge badge--tier badge--tier-gold",
        RewardTier::Diamond => "badge badge--tier badge--tier-diamond",
    }
}

#[component]
pub fn TierBadge(tier: RewardTier) -> impl IntoView {
    view! {
        <span class=tier_class(tier) title=tier.range_label()>
            {tier.label()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_class_falls_back_to_neutral() {
        assert_eq!(variant_class("success"), "badge--success");
        assert_eq!(variant_class("whatever"), "badge--neutral");
    }

    #[test]
    fn test_tier_class() {
        assert!(tier_class(RewardTier::Diamond).ends_with("badge--tier-diamond"));
        assert!(tier_class(RewardTier::Bronze).ends_with("badge--tier-bronze"));
    }
}
