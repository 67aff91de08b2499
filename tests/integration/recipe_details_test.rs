// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::integration::helpers::{network_error, quota_error, StubFoodSource};
    use foodie::domain::models::recipe::{
        AmountConversion, AmountConversionRequest, RecipeInformation,
    };
    use foodie::domain::services::recipe_details::{
        RecipeDetailsError, RecipeDetailsService, CONVERSION_FAILED_MESSAGE,
        DETAILS_FAILED_MESSAGE,
    };
    use std::collections::HashMap;
    use std::sync::Arc;

    fn information() -> RecipeInformation {
        RecipeInformation {
            id: 42,
            title: "Tomato Pasta".to_string(),
            servings: Some(2),
            ..Default::default()
        }
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_details_collect_substitutes_per_missed_ingredient() {
        let mut substitutes = HashMap::new();
        substitutes.insert("butter".to_string(), Ok(names(&["margarine", "olive oil"])));
        substitutes.insert("basil".to_string(), Err(network_error()));
        let source = Arc::new(StubFoodSource {
            information: Ok(information()),
            substitutes,
            ..Default::default()
        });
        let service = RecipeDetailsService::new(source.clone());

        let details = service
            .details(42, &names(&["butter", "basil"]))
            .await
            .unwrap();

        assert_eq!(details.information, information());
        assert_eq!(details.substitutes.len(), 2);
        assert_eq!(details.substitutes["butter"], names(&["margarine", "olive oil"]));
        assert!(details.substitutes["basil"].is_empty());
        assert_eq!(source.calls()[0], "recipe_information:42");
        assert_eq!(source.call_count(), 3);
    }

    #[tokio::test]
    async fn test_details_without_missed_ingredients_skip_substitutes() {
        let source = Arc::new(StubFoodSource {
            information: Ok(information()),
            ..Default::default()
        });
        let service = RecipeDetailsService::new(source.clone());

        let details = service.details(42, &[]).await.unwrap();

        assert!(details.substitutes.is_empty());
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_information_failure_fails_details() {
        let source = Arc::new(StubFoodSource {
            information: Err(network_error()),
            ..Default::default()
        });
        let service = RecipeDetailsService::new(source.clone());

        let err = service.details(42, &names(&["butter"])).await.unwrap_err();

        assert_eq!(err, RecipeDetailsError::Upstream(DETAILS_FAILED_MESSAGE.to_string()));
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_information_failure_prefers_api_message() {
        let source = Arc::new(StubFoodSource {
            information: Err(quota_error()),
            ..Default::default()
        });
        let service = RecipeDetailsService::new(source);

        let err = service.details(42, &[]).await.unwrap_err();

        assert_eq!(
            err,
            RecipeDetailsError::Upstream(
                "Your daily points limit of 150 has been reached.".to_string()
            )
        );
    }

    fn conversion_request(target_unit: &str) -> AmountConversionRequest {
        AmountConversionRequest {
            ingredient_id: 9,
            source_amount: 2.0,
            source_unit: "cups".to_string(),
            target_unit: target_unit.to_string(),
        }
    }

    #[tokio::test]
    async fn test_convert_amount_returns_target() {
        let source = Arc::new(StubFoodSource {
            conversion: Ok(AmountConversion {
                amount: 473.18,
                unit: "ml".to_string(),
            }),
            ..Default::default()
        });
        let service = RecipeDetailsService::new(source.clone());

        let conversion = service.convert_amount(&conversion_request("ml")).await.unwrap();

        assert_eq!(conversion.unit, "ml");
        assert!((conversion.amount - 473.18).abs() < f64::EPSILON);
        assert_eq!(source.calls(), vec!["convert_amount:9:cups:ml".to_string()]);
    }

    #[tokio::test]
    async fn test_convert_amount_requires_target_unit() {
        let source = Arc::new(StubFoodSource::default());
        let service = RecipeDetailsService::new(source.clone());

        let err = service.convert_amount(&conversion_request(" ")).await.unwrap_err();

        assert!(matches!(err, RecipeDetailsError::Validation(_)));
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_convert_amount_failure_uses_generic_message() {
        let source = Arc::new(StubFoodSource {
            conversion: Err(quota_error()),
            ..Default::default()
        });
        let service = RecipeDetailsService::new(source);

        let err = service.convert_amount(&conversion_request("ml")).await.unwrap_err();

        assert_eq!(err, RecipeDetailsError::Upstream(CONVERSION_FAILED_MESSAGE.to_string()));
    }
}
