mod record_validation {
    use amigo::error::AppError;
    use amigo::models::booking::NewBooking;
    use amigo::models::hotel::NewHotel;
    use chrono::NaiveDate;

    fn new_hotel(name: &str, location: &str, price_per_night: f64) -> NewHotel {
        NewHotel {
            name: name.to_string(),
            location: location.to_string(),
            description: "Test description".to_string(),
            price_per_night,
            image_url: None,
        }
    }

    fn new_booking(guests: i32, check_in: (i32, u32, u32), check_out: (i32, u32, u32)) -> NewBooking {
        NewBooking {
            hotel_id: 1,
            check_in: NaiveDate::from_ymd_opt(check_in.0, check_in.1, check_in.2).unwrap(),
            check_out: NaiveDate::from_ymd_opt(check_out.0, check_out.1, check_out.2).unwrap(),
            guests,
            customer_name: "Maria Lopez".to_string(),
            customer_email: "maria@example.com".to_string(),
            total_price: 399.98,
        }
    }

    #[test]
    fn well_formed_hotel_passes() {
        let hotel = new_hotel("Amigo Test Hotel", "Test City", 100.0);
        assert!(hotel.validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let hotel = new_hotel("", "Test City", 100.0);
        assert!(matches!(hotel.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let hotel = new_hotel("   ", "Test City", 100.0);
        assert!(matches!(hotel.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn empty_location_is_rejected() {
        let hotel = new_hotel("Amigo Test Hotel", "", 100.0);
        assert!(matches!(hotel.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        for price in [0.0, -10.0] {
            let hotel = new_hotel("Amigo Test Hotel", "Test City", price);
            assert!(matches!(hotel.validate(), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn single_guest_booking_passes() {
        let booking = new_booking(1, (2024, 7, 1), (2024, 7, 3));
        assert!(booking.validate().is_ok());
    }

    #[test]
    fn zero_guests_is_rejected() {
        let booking = new_booking(0, (2024, 7, 1), (2024, 7, 3));
        assert!(matches!(booking.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn check_out_before_check_in_is_rejected() {
        let booking = new_booking(2, (2024, 7, 3), (2024, 7, 1));
        assert!(matches!(booking.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn same_day_check_out_is_rejected() {
        let booking = new_booking(2, (2024, 7, 1), (2024, 7, 1));
        assert!(matches!(booking.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn missing_customer_fields_are_rejected() {
        let mut booking = new_booking(2, (2024, 7, 1), (2024, 7, 3));
        booking.customer_name = String::new();
        assert!(matches!(booking.validate(), Err(AppError::Validation(_))));

        let mut booking = new_booking(2, (2024, 7, 1), (2024, 7, 3));
        booking.customer_email = "  ".to_string();
        assert!(matches!(booking.validate(), Err(AppError::Validation(_))));
    }
}
