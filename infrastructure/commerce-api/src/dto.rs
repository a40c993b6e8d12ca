use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use business::domain::catalog::model::{Banner, BannerCta, Brand, Category, Product};
use business::domain::catalog::value_objects::BrandKind;
use business::domain::checkout::gateway::OrderRequest;

/// The API stores product images as a JSON-encoded string of an array of
/// URLs; newer records may already carry a plain array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ImagesField {
    List(Vec<String>),
    Encoded(String),
}

/// Decodes the wire images field into a typed URL list, exactly once at this
/// boundary. A corrupt payload decodes to an empty list and is logged.
pub fn decode_images(field: Option<ImagesField>) -> Vec<String> {
    match field {
        None => Vec::new(),
        Some(ImagesField::List(urls)) => urls,
        Some(ImagesField::Encoded(raw)) => match serde_json::from_str(&raw) {
            Ok(urls) => urls,
            Err(err) => {
                warn!(target: "storefront", "Discarding corrupt images payload: {}", err);
                Vec::new()
            }
        },
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl CategoryDto {
    pub fn into_domain(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            slug: self.slug,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BrandKind,
}

impl BrandDto {
    pub fn into_domain(self) -> Brand {
        Brand {
            id: self.id,
            name: self.name,
            kind: self.kind,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub discount: i64,
    #[serde(default)]
    pub images: Option<ImagesField>,
    #[serde(default)]
    pub brand: Option<BrandDto>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    pub created_at: DateTime<Utc>,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            discount: self.discount,
            images: decode_images(self.images),
            brand: self.brand.map(BrandDto::into_domain),
            category: self.category.map(CategoryDto::into_domain),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerDto {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl BannerDto {
    pub fn into_domain(self) -> Banner {
        Banner {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            link: self.link,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerCtaDto {
    pub heading: String,
    #[serde(default)]
    pub subheading: Option<String>,
    pub button_label: String,
    pub button_link: String,
}

impl BannerCtaDto {
    pub fn into_domain(self) -> BannerCta {
        BannerCta {
            heading: self.heading,
            subheading: self.subheading,
            button_label: self.button_label,
            button_link: self.button_link,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: String,
    pub price: i64,
    pub discount: i64,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequestDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub payment_mode: String,
    pub items: Vec<OrderItemDto>,
}

impl OrderRequestDto {
    pub fn from_domain(request: &OrderRequest) -> Self {
        Self {
            name: request.draft.name.clone(),
            email: request.draft.email.clone(),
            phone: request.draft.phone.clone(),
            address: request.draft.address.clone(),
            city: request.draft.city.clone(),
            pincode: request.draft.pincode.clone(),
            payment_mode: request.draft.payment_mode.to_string(),
            items: request
                .items
                .iter()
                .map(|item| OrderItemDto {
                    id: item.id.clone(),
                    price: item.price,
                    discount: item.discount,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponseDto {
    pub order_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_string_encoded_image_array() {
        let field = Some(ImagesField::Encoded(
            r#"["https://cdn.example/a.jpg","https://cdn.example/b.jpg"]"#.to_string(),
        ));

        let urls = decode_images(field);

        assert_eq!(
            urls,
            vec![
                "https://cdn.example/a.jpg".to_string(),
                "https://cdn.example/b.jpg".to_string()
            ]
        );
    }

    #[test]
    fn should_accept_plain_array_images() {
        let field = Some(ImagesField::List(vec!["https://cdn.example/a.jpg".to_string()]));

        assert_eq!(decode_images(field).len(), 1);
    }

    #[test]
    fn should_decode_corrupt_images_to_empty_list() {
        let field = Some(ImagesField::Encoded("not-json".to_string()));

        assert!(decode_images(field).is_empty());
    }

    #[test]
    fn should_parse_product_with_encoded_images() {
        let raw = r#"{
            "id": "p1",
            "name": "Iron Man Figure",
            "description": "Die-cast",
            "price": 1000,
            "discount": 100,
            "images": "[\"https://cdn.example/p1.jpg\"]",
            "brand": {"id": "b1", "name": "Iron Forge", "type": "THIRD_PARTY"},
            "createdAt": "2026-01-15T10:00:00Z"
        }"#;

        let dto: ProductDto = serde_json::from_str(raw).unwrap();
        let product = dto.into_domain();

        assert_eq!(product.images, vec!["https://cdn.example/p1.jpg".to_string()]);
        assert_eq!(product.effective_price(), 900);
        assert_eq!(product.brand.unwrap().kind, BrandKind::ThirdParty);
        assert!(product.category.is_none());
    }

    #[test]
    fn should_serialize_order_request_in_wire_shape() {
        use business::domain::checkout::model::{
            NewOrderDraftProps, OrderDraft, OrderItem, PaymentMode,
        };

        let draft = OrderDraft::new(NewOrderDraftProps {
            name: "Asha Rao".to_string(),
            email: None,
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            pincode: "560001".to_string(),
            payment_mode: PaymentMode::Cod,
        })
        .unwrap();
        let request = OrderRequest {
            draft,
            items: vec![OrderItem {
                id: "p1".to_string(),
                price: 1000,
                discount: 100,
                quantity: 2,
            }],
        };

        let wire = serde_json::to_value(OrderRequestDto::from_domain(&request)).unwrap();

        assert_eq!(wire["paymentMode"], "cod");
        assert_eq!(wire["items"][0]["quantity"], 2);
        assert!(wire.get("email").is_none());
    }
}
