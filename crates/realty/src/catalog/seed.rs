//! One-time population of the listings collection with sample data.

use chrono::Utc;
use tracing::warn;

use super::domain::{Property, PROPERTIES};
use super::service::CatalogService;
use crate::store::StoreError;

/// Insert the sample listings if the collection is currently empty.
///
/// Returns the number of documents written: the full sample size on first
/// run, `0` on every later call while the collection stays populated. Insert
/// failures are logged and skipped so one bad write does not abort the
/// remainder.
pub async fn seed_properties(catalog: &CatalogService) -> Result<u64, StoreError> {
    let existing = catalog.count(PROPERTIES).await?;
    if existing > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for listing in sample_listings() {
        match catalog.create(PROPERTIES, &listing).await {
            Ok(_) => inserted += 1,
            Err(error) => warn!(title = %listing.title, %error, "skipping sample listing"),
        }
    }
    Ok(inserted)
}

/// Fixed sample listings used to bootstrap an empty catalog.
pub fn sample_listings() -> Vec<Property> {
    let listed_at = Utc::now();
    vec![
        Property {
            title: "Modern Family House".to_string(),
            description: "Spacious 4-bedroom home with open floor plan and large backyard."
                .to_string(),
            price: 549_000.0,
            address: "123 Maple Street".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62704".to_string(),
            bedrooms: 4,
            bathrooms: 2.5,
            area_sqft: 2_400.0,
            property_type: "House".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1572120360610-d971b9d7767c".to_string(),
                "https://images.unsplash.com/photo-1560518883-ce09059eeffa".to_string(),
            ],
            amenities: vec![
                "Garage".to_string(),
                "Garden".to_string(),
                "Central Air".to_string(),
            ],
            featured: true,
            status: "For Sale".to_string(),
            listed_at,
        },
        Property {
            title: "Downtown City Apartment".to_string(),
            description: "Stylish 2-bed apartment close to shops, cafes, and public transit."
                .to_string(),
            price: 329_000.0,
            address: "456 Oak Avenue, Apt 12B".to_string(),
            city: "Metro City".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            bedrooms: 2,
            bathrooms: 1.0,
            area_sqft: 900.0,
            property_type: "Apartment".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85".to_string(),
                "https://images.unsplash.com/photo-1501183638710-841dd1904471".to_string(),
            ],
            amenities: vec![
                "Elevator".to_string(),
                "Doorman".to_string(),
                "Gym".to_string(),
            ],
            featured: true,
            status: "For Sale".to_string(),
            listed_at,
        },
        Property {
            title: "Cozy Suburban Condo".to_string(),
            description: "Bright 1-bedroom condo with balcony and community pool.".to_string(),
            price: 189_000.0,
            address: "789 Pine Lane, Unit 305".to_string(),
            city: "Lakeside".to_string(),
            state: "CA".to_string(),
            zip_code: "92040".to_string(),
            bedrooms: 1,
            bathrooms: 1.0,
            area_sqft: 650.0,
            property_type: "Condo".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1493809842364-78817add7ffb".to_string(),
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750".to_string(),
            ],
            amenities: vec!["Pool".to_string(), "Clubhouse".to_string()],
            featured: false,
            status: "For Sale".to_string(),
            listed_at,
        },
    ]
}
