use crate::shared::api_utils::{delete_by_id, fetch_list};
use contracts::domain::a004_business::{BusinessDirection, BusinessRecord};

fn business_path(direction: BusinessDirection) -> String {
    format!("/api/{}", direction.endpoint())
}

pub async fn fetch_business(direction: BusinessDirection) -> Result<Vec<BusinessRecord>, String> {
    fetch_list(&business_path(direction), direction.title()).await
}

pub async fn delete_business(direction: BusinessDirection, id: String) -> Result<(), String> {
    delete_by_id(&business_path(direction), &id, "business record").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_path() {
        assert_eq!(business_path(BusinessDirection::Given), "/api/business-given");
        assert_eq!(business_path(BusinessDirection::Received), "/api/business-received");
    }
}
