//! Storefront content models: banners, events, delivery zones.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{BannerId, DeliveryZoneId, EventId, EventPhotoId};

/// A promotional banner shown on the storefront home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Banner {
    pub id: BannerId,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A restaurant event with an attached photo gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// A photo belonging to an event gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct EventPhoto {
    pub id: EventPhotoId,
    pub event_id: EventId,
    pub image_url: String,
    pub caption: Option<String>,
    pub display_order: i32,
}

/// A postal-code delivery zone with its fee and minimum order value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct DeliveryZone {
    pub id: DeliveryZoneId,
    pub name: String,
    pub postal_code: String,
    pub delivery_fee: Decimal,
    pub minimum_order: Decimal,
    pub is_active: bool,
}
