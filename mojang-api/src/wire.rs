//! Response and request bodies, one schema per endpoint.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mojang_types::Textures;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

/// `GET /check`: a list of `{service: status}` objects. Keys keep their wire
/// order, so an object with several services flattens in the order sent.
pub(crate) type StatusResponse = Vec<Map<String, Value>>;

/// `GET /users/profiles/minecraft/{name}`. The id is optional so an empty
/// object or an error body reads as "not found" instead of a decode failure.
#[derive(Deserialize)]
pub(crate) struct LookupResponse {
    pub(crate) id: Option<String>,
}

/// Element of `POST /profiles/minecraft`.
#[derive(Deserialize)]
pub(crate) struct NameId {
    pub(crate) id: String,
    pub(crate) name: String,
}

/// `GET /session/minecraft/profile/{uuid}`.
#[derive(Deserialize)]
pub(crate) struct SessionProfile {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) properties: Vec<Property>,
}

#[derive(Deserialize)]
pub(crate) struct Property {
    pub(crate) value: String,
}

/// The base64 JSON document held in `properties[0].value`.
#[derive(Deserialize)]
struct TexturePayload {
    textures: TextureSet,
}

#[derive(Deserialize)]
struct TextureSet {
    #[serde(rename = "SKIN")]
    skin: Texture,
    #[serde(rename = "CAPE")]
    cape: Option<Texture>,
}

#[derive(Deserialize)]
struct Texture {
    url: String,
}

/// Element of `GET /user/profiles/{uuid}/names`.
#[derive(Deserialize)]
pub(crate) struct NameHistoryItem {
    pub(crate) name: String,
    #[serde(rename = "changedToAt")]
    pub(crate) changed_to_at: Option<i64>,
}

#[derive(Serialize)]
pub(crate) struct AuthenticateRequest<'a> {
    pub(crate) agent: Agent,
    pub(crate) username: &'a str,
    pub(crate) password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct Agent {
    pub(crate) name: &'static str,
    pub(crate) version: u32,
}

impl Default for Agent {
    fn default() -> Self {
        Self {
            name: "Minecraft",
            version: 1,
        }
    }
}

/// `POST /authenticate` on success.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthenticateResponse {
    pub(crate) access_token: String,
    pub(crate) selected_profile: NameId,
}

/// `POST /authenticate` on rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthenticateError {
    pub(crate) error: Option<String>,
    pub(crate) error_message: String,
}

/// `GET /minecraft/profile`.
#[derive(Deserialize)]
pub(crate) struct AccountProfile {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) skins: Vec<Skin>,
}

#[derive(Deserialize)]
pub(crate) struct Skin {
    pub(crate) url: String,
}

/// `GET /minecraft/profile/name/{name}/available`.
#[derive(Deserialize)]
pub(crate) struct AvailabilityResponse {
    pub(crate) status: String,
}

/// Decode a base64 texture payload into skin and cape URLs.
pub(crate) fn decode_textures(value: &str) -> Result<Textures> {
    let raw = STANDARD.decode(value.trim())?;
    let payload: TexturePayload = serde_json::from_slice(&raw)?;

    Ok(Textures::Decoded {
        skin_url: payload.textures.skin.url,
        cape_url: payload.textures.cape.map(|c| c.url),
    })
}

impl SessionProfile {
    /// The texture property, decoded or left as-is. A missing property is
    /// only an error when decoding was asked for.
    pub(crate) fn textures(&self, decode: bool) -> Result<Textures> {
        match (self.properties.first(), decode) {
            (Some(property), true) => decode_textures(&property.value),
            (Some(property), false) => Ok(Textures::Encoded(property.value.clone())),
            (None, true) => Err(ApiError::MalformedPayload(format!(
                "profile {} has no texture property",
                self.id
            ))),
            (None, false) => Ok(Textures::Absent),
        }
    }
}
