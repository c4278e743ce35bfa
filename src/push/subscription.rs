//! The push subscription record exchanged with the platform and the backend.

use serde::{Deserialize, Serialize};

/// The encryption keys of a push subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushKeys {
    /// The client public key (P-256 ECDH), base64url encoded.
    pub p256dh: String,
    /// The authentication secret, base64url encoded.
    pub auth: String,
}

/// A subscription issued by the browser's push service.
///
/// The client only observes it and asks for it to be created or revoked.
/// It serializes to the body expected by the push endpoints of the backend:
/// `{"endpoint": ..., "keys": {"p256dh": ..., "auth": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSubscriptionRecord {
    /// The push service URL that messages for this subscription are sent to.
    pub endpoint: String,
    /// The keys used to encrypt messages for this subscription.
    pub keys: PushKeys,
}
