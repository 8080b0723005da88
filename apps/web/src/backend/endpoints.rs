/// Backend routes consumed by the front end, resolved against one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn login(&self) -> String {
        format!("{}/api/login", self.base)
    }

    pub fn logout(&self) -> String {
        format!("{}/api/logout", self.base)
    }

    pub fn auth_check(&self) -> String {
        format!("{}/api/auth/check", self.base)
    }

    pub fn analyze(&self) -> String {
        format!("{}/api/analyze/", self.base)
    }

    pub fn stats(&self) -> String {
        format!("{}/api/stats/", self.base)
    }

    pub fn screenings(&self) -> String {
        format!("{}/api/screenings/", self.base)
    }

    pub fn candidate(&self, id: i64) -> String {
        format!("{}/api/candidates/{id}", self.base)
    }
}
