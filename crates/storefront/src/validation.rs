//! Input validation at the API boundary.
//!
//! The catalog store accepts anything well-typed. These checks reproduce the
//! storefront's form rules so malformed input is turned away with a 400
//! before it reaches the store. Validators that normalize (trim) their input
//! return the cleaned value.

use thiserror::Error;
use url::Url;

use mark_store_core::{NewCategory, NewProduct, NewReview, Price, ProductId, ProductPatch};

use crate::models::{LoginRequest, OrderRequest, RegisterRequest};

/// Lowest accepted review rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted review rating.
pub const MAX_RATING: i32 = 5;
/// Largest quantity of one product in a single order.
pub const MAX_QUANTITY: u32 = 999;
/// Number of name parts a full (three-part) name must have.
pub const FULL_NAME_PARTS: usize = 3;

/// Governorates offered on the order form.
pub const IRAQI_PROVINCES: [&str; 18] = [
    "بغداد",
    "البصرة",
    "أربيل",
    "نينوى",
    "الأنبار",
    "الديوانية",
    "كربلاء",
    "كركوك",
    "بابل",
    "واسط",
    "صلاح الدين",
    "النجف",
    "ديالى",
    "المثنى",
    "ذي قار",
    "ميسان",
    "السليمانية",
    "دهوك",
];

/// Validation failures, reported to the client as 400 Bad Request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("full name must contain at least {FULL_NAME_PARTS} names")]
    IncompleteFullName,

    #[error("rating must be between {MIN_RATING} and {MAX_RATING} (got {0})")]
    RatingOutOfRange(i32),

    #[error("price must be greater than zero")]
    NonPositivePrice,

    #[error("price must not exceed {}", Price::MAX)]
    PriceTooHigh,

    #[error("image must be an absolute URL or a path")]
    InvalidImage,

    #[error("unknown province: {0}")]
    UnknownProvince(String),

    #[error("order must contain at least one item")]
    EmptyOrder,

    #[error("quantity for product {0} must be at least 1")]
    ZeroQuantity(ProductId),

    #[error("quantity for product {0} must not exceed {MAX_QUANTITY}")]
    QuantityTooLarge(ProductId),

    #[error("order total is too large")]
    TotalTooLarge,
}

type Result<T> = std::result::Result<T, ValidationError>;

fn required(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn price(value: Price) -> Result<()> {
    if !value.is_positive() {
        return Err(ValidationError::NonPositivePrice);
    }
    if value > Price::MAX {
        return Err(ValidationError::PriceTooHigh);
    }
    Ok(())
}

fn image(value: &str) -> Result<()> {
    required(value, "image")?;
    let value = value.trim();
    if value.starts_with('/') || Url::parse(value).is_ok() {
        Ok(())
    } else {
        Err(ValidationError::InvalidImage)
    }
}

/// Validate a new category, trimming its name.
///
/// # Errors
///
/// Returns `ValidationError::Required` if the name is blank.
pub fn category(input: NewCategory) -> Result<NewCategory> {
    required(&input.name, "name")?;
    Ok(NewCategory {
        name: input.name.trim().to_string(),
    })
}

/// Validate a new product.
///
/// # Errors
///
/// Returns an error for blank fields, a non-URL image, or a price that is
/// not above zero or above [`Price::MAX`].
pub fn new_product(input: &NewProduct) -> Result<()> {
    required(&input.name, "name")?;
    required(&input.description, "description")?;
    image(&input.image)?;
    price(input.price)
}

/// Validate the fields present in a product update.
///
/// # Errors
///
/// Same rules as [`new_product`], applied only to provided fields.
pub fn product_patch(patch: &ProductPatch) -> Result<()> {
    if let Some(name) = &patch.name {
        required(name, "name")?;
    }
    if let Some(description) = &patch.description {
        required(description, "description")?;
    }
    if let Some(value) = &patch.image {
        image(value)?;
    }
    if let Some(value) = patch.price {
        price(value)?;
    }
    Ok(())
}

/// Validate a review, trimming its name and comment.
///
/// # Errors
///
/// Returns an error for a blank name or comment or a rating outside 1-5.
pub fn review(input: NewReview) -> Result<NewReview> {
    required(&input.customer_name, "customerName")?;
    required(&input.comment, "comment")?;
    if !(MIN_RATING..=MAX_RATING).contains(&input.rating) {
        return Err(ValidationError::RatingOutOfRange(input.rating));
    }
    Ok(NewReview {
        customer_name: input.customer_name.trim().to_string(),
        rating: input.rating,
        comment: input.comment.trim().to_string(),
    })
}

/// Validate a registration form.
///
/// # Errors
///
/// Returns an error for blank fields or a name with fewer than three parts.
pub fn registration(input: &RegisterRequest) -> Result<()> {
    required(&input.full_name, "fullName")?;
    required(&input.phone_number, "phoneNumber")?;
    if input.full_name.split_whitespace().count() < FULL_NAME_PARTS {
        return Err(ValidationError::IncompleteFullName);
    }
    Ok(())
}

/// Validate a login form.
///
/// # Errors
///
/// Returns `ValidationError::Required` if the phone number is blank.
pub fn login(input: &LoginRequest) -> Result<()> {
    required(&input.phone_number, "phoneNumber")
}

/// Validate an order form.
///
/// # Errors
///
/// Returns an error for blank contact fields, an unknown province, an empty
/// cart, or a quantity outside `1..=MAX_QUANTITY`.
pub fn order(input: &OrderRequest) -> Result<()> {
    required(&input.full_name, "fullName")?;
    required(&input.phone, "phone")?;
    required(&input.province, "province")?;
    required(&input.city, "city")?;

    let province = input.province.trim();
    if !IRAQI_PROVINCES.contains(&province) {
        return Err(ValidationError::UnknownProvince(province.to_string()));
    }

    if input.items.is_empty() {
        return Err(ValidationError::EmptyOrder);
    }
    for item in &input.items {
        if item.quantity == 0 {
            return Err(ValidationError::ZeroQuantity(item.product_id));
        }
        if item.quantity > MAX_QUANTITY {
            return Err(ValidationError::QuantityTooLarge(item.product_id));
        }
    }
    Ok(())
}
