use crate::office::BadgeToken;

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: u32,

    pub external_id: String,

    pub first_name: String,

    pub last_name: String,

    pub secret: String,

    pub preferred_temperature: f64,

    pub preferred_light_level: f64,

    pub badge_token: BadgeToken,
}
