//! Path templates for the fixed read API.
//!
//! Every operation resolves against `<base>/<op>/<key1>/<val1>/...`: keys
//! and values are path segments, not a query string. Segment case and
//! parameter order are significant and must match the templates below.
//! Values are substituted as-is; the server sees exactly what the caller
//! passed, including empty strings.

/// Page size applied when a listing operation is called without one.
pub const DEFAULT_PER_PAGE: u32 = 10;

fn per_page(perpage: Option<u32>) -> u32 {
    perpage.unwrap_or(DEFAULT_PER_PAGE)
}

pub fn login(username: &str, password_token: &str) -> String {
    format!("login/luser/{}/lpass/{}", username, password_token)
}

pub fn profile(username: &str) -> String {
    format!("profile/username/{}", username)
}

pub fn user_by_search(text: &str, perpage: Option<u32>) -> String {
    format!("userBySearch/text/{}/perpage/{}", text, per_page(perpage))
}

pub fn profile_categories(username: &str) -> String {
    format!("profilecategories/username/{}", username)
}

pub fn video(video_hash: &str) -> String {
    format!("video/videohash/{}", video_hash)
}

pub fn category_video(cat: u32, perpage: Option<u32>) -> String {
    format!("categoryVideos/cat/{}/perpage/{}", cat, per_page(perpage))
}

pub fn video_by_user(username: &str, perpage: Option<u32>) -> String {
    format!("videoByUser/username/{}/perpage/{}", username, per_page(perpage))
}

pub fn comment_by_videos(video_hash: &str, perpage: Option<u32>) -> String {
    format!(
        "commentByVideos/videohash/{}/perpage/{}",
        video_hash,
        per_page(perpage)
    )
}

pub fn video_by_search(text: &str, perpage: Option<u32>) -> String {
    format!("videoBySearch/text/{}/perpage/{}", text, per_page(perpage))
}

pub fn video_by_tag(text: &str) -> String {
    format!("videobytag/text/{}", text)
}

pub fn upload_form(username: &str, ltoken: &str) -> String {
    format!("uploadform/luser/{}/ltoken/{}", username, ltoken)
}
