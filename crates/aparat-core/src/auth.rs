//! Password token derivation.
//!
//! The login endpoint expects `sha1(hex(md5(password)))` as lowercase hex.
//! The scheme is fixed by the server: no salt, no iteration count, and a
//! salted or iterated construction will not authenticate.

use md5::{Digest, Md5};
use sha1::Sha1;

/// Derive the wire token sent as `lpass` from a raw password.
///
/// Two fixed stages: md5 of the raw bytes rendered as lowercase hex, then
/// sha1 of that hex string's ASCII bytes, again as lowercase hex. The raw
/// password never leaves this function.
pub fn password_token(raw_password: &str) -> String {
    let md5_hex = format!("{:x}", Md5::digest(raw_password.as_bytes()));
    format!("{:x}", Sha1::digest(md5_hex.as_bytes()))
}
