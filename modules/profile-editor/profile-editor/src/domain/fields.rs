pub struct ProfileFields;

impl ProfileFields {
    pub const NAME: &'static str = "name";
    pub const BIO: &'static str = "bio";
    pub const BACKGROUND_URL: &'static str = "background_url";
    pub const AVATAR_URL: &'static str = "avatar_url";
    pub const LINKS: &'static str = "links";
}

/// Inclusive bounds, counted in characters.
pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 15;
pub const BIO_MAX_CHARS: usize = 200;
