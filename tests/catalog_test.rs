#[cfg(test)]
mod hotel_search {
    use amigo::models::hotel::Hotel;
    use amigo::services::catalog::{filter_by_query, matches_query};
    use chrono::NaiveDate;

    fn hotel(id: i32, name: &str, location: &str, description: &str) -> Hotel {
        Hotel {
            id,
            name: name.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            price_per_night: 100.0,
            image_url: None,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    fn sample_catalog() -> Vec<Hotel> {
        vec![
            hotel(1, "Amigo Beach Resort", "Cancun", "beachfront property"),
            hotel(2, "Amigo City Hotel", "Mexico City", "downtown area"),
        ]
    }

    #[test]
    fn empty_query_keeps_every_hotel_in_creation_order() {
        let result = filter_by_query(sample_catalog(), "");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, 1);
        assert_eq!(result[1].id, 2);
    }

    #[test]
    fn beach_matches_only_the_beach_resort() {
        let result = filter_by_query(sample_catalog(), "Beach");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Amigo Beach Resort");
    }

    #[test]
    fn matching_is_case_insensitive() {
        for query in ["beach", "BEACH", "bEaCh"] {
            let result = filter_by_query(sample_catalog(), query);
            assert_eq!(result.len(), 1, "query {:?} should match the resort", query);
            assert_eq!(result[0].id, 1);
        }
    }

    #[test]
    fn query_matches_against_location() {
        let result = filter_by_query(sample_catalog(), "cancun");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn query_matches_against_description() {
        let result = filter_by_query(sample_catalog(), "downtown");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn unmatched_query_yields_empty_result() {
        let result = filter_by_query(sample_catalog(), "modern");
        assert!(result.is_empty());
    }

    #[test]
    fn matching_is_substring_not_whole_word() {
        // "own" only occurs inside "downtown"
        let result = filter_by_query(sample_catalog(), "own");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn shared_term_preserves_creation_order() {
        let catalog = sample_catalog();
        let total = catalog.len();
        let result = filter_by_query(catalog, "Amigo");
        assert!(result.len() <= total);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, 1);
        assert_eq!(result[1].id, 2);
    }

    #[test]
    fn matching_folds_unicode_case() {
        let chateau = hotel(3, "Château Amigo", "Oaxaca", "historic estate");
        assert!(matches_query(&chateau, "CHÂTEAU"));
        assert!(matches_query(&chateau, "château"));
        assert!(!matches_query(&chateau, "castle"));
    }

    #[test]
    fn predicate_checks_all_three_fields() {
        let resort = &sample_catalog()[0];
        assert!(matches_query(resort, "Resort"));
        assert!(matches_query(resort, "cancun"));
        assert!(matches_query(resort, "beachfront"));
        assert!(!matches_query(resort, "downtown"));
    }
}

#[cfg(test)]
mod static_pages {
    use amigo::services::content;

    #[test]
    fn faq_list_is_complete() {
        let faqs = content::faqs();
        assert_eq!(faqs.len(), 5);
        assert_eq!(faqs[0].question, "What is your cancellation policy?");
    }

    #[test]
    fn informational_pages_have_content() {
        assert_eq!(content::about().title, "About Amigo Hotels");
        assert!(!content::contact().body.is_empty());
    }
}
