//! Entity Shape Tests
//!
//! Checks the JSON contract of the three shapes: field names, lenient decoding of
//! absent fields and the `Entity` accessors.

#[cfg(test)]
mod tests {
    use crate::entities::{Car, Entity, Flower, Furniture};

    #[test]
    fn test_car_decodes_without_id() {
        let car: Car = serde_json::from_str(
            r#"{"brand":"Toyota","model":"Corolla","mileage":12000,"owner_count":1}"#,
        )
        .unwrap();

        assert_eq!(car.id, 0);
        assert_eq!(car.brand, "Toyota");
        assert_eq!(car.model, "Corolla");
        assert_eq!(car.mileage, 12000);
        assert_eq!(car.owner_count, 1);
    }

    #[test]
    fn test_car_serializes_snake_case_fields() {
        let car = Car {
            id: 1,
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            mileage: 12000,
            owner_count: 1,
        };

        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "brand": "Toyota",
                "model": "Corolla",
                "mileage": 12000,
                "owner_count": 1
            })
        );
    }

    #[test]
    fn test_missing_fields_take_zero_values() {
        let furniture: Furniture = serde_json::from_str(r#"{"name":"Desk"}"#).unwrap();

        assert_eq!(furniture.name, "Desk");
        assert_eq!(furniture.producer, "");
        assert_eq!(furniture.height, 0);
        assert_eq!(furniture.width, 0);
        assert_eq!(furniture.length, 0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let flower: Flower =
            serde_json::from_str(r#"{"name":"Rose","colour":"red","price":1.5}"#).unwrap();

        assert_eq!(flower.name, "Rose");
        assert_eq!(flower.price, 1.5);
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<Car>(r#"{"brand":"Toyota","mileage":"far"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_entity_accessors_and_collection_names() {
        let mut flower = Flower::default();
        flower.set_id(42);

        assert_eq!(flower.id(), 42);
        assert_eq!(Car::COLLECTION, "cars");
        assert_eq!(Furniture::COLLECTION, "furniture");
        assert_eq!(Flower::COLLECTION, "flowers");
    }
}
