// Router state - current location and history

pub const HOME: &str = "/dashboard";

/// Location source for the navigation. Mirrors browser-style history.
pub struct Router {
    pub current: String,
    pub history: Vec<String>,
    pub history_index: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(HOME)
    }
}

impl Router {
    pub fn new(start: &str) -> Self {
        let start = normalize(start);
        Self {
            current: start.clone(),
            history: vec![start],
            history_index: 0,
        }
    }

    pub fn location(&self) -> &str {
        &self.current
    }

    /// Pushes `path` onto the history. Returns false if the location is unchanged.
    pub fn navigate(&mut self, path: &str) -> bool {
        let path = normalize(path);
        if path == self.current {
            return false;
        }
        // Drop forward history when branching off
        self.history.truncate(self.history_index + 1);
        self.history.push(path.clone());
        self.history_index += 1;
        log::info!("navigate {} -> {}", self.current, path);
        self.current = path;
        true
    }

    pub fn go_back(&mut self) -> Option<&str> {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.current = self.history[self.history_index].clone();
            Some(self.current.as_str())
        } else {
            None
        }
    }

    pub fn go_forward(&mut self) -> Option<&str> {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.current = self.history[self.history_index].clone();
            Some(self.current.as_str())
        } else {
            None
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }
}

/// Leading slash, no trailing slash, empty path redirected home.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    let (route, rest) = match trimmed.find(|c: char| c == '?' || c == '#') {
        Some(idx) => trimmed.split_at(idx),
        None => (trimmed, ""),
    };
    let route = route.trim_matches('/');
    if route.is_empty() {
        return format!("{}{}", HOME, rest);
    }
    format!("/{}{}", route, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(""), "/dashboard");
        assert_eq!(normalize("/"), "/dashboard");
        assert_eq!(normalize("products/list/"), "/products/list");
        assert_eq!(normalize(" /orders "), "/orders");
        assert_eq!(normalize("/products/list/?page=2"), "/products/list?page=2");
    }

    #[test]
    fn test_navigate_reports_changes() {
        let mut router = Router::default();
        assert_eq!(router.location(), "/dashboard");
        assert!(!router.navigate("/dashboard/"));
        assert!(router.navigate("/products/list"));
        assert_eq!(router.history.len(), 2);
    }

    #[test]
    fn test_back_forward() {
        let mut router = Router::new("/dashboard");
        router.navigate("/a");
        router.navigate("/b");
        assert_eq!(router.go_back(), Some("/a"));
        assert_eq!(router.go_back(), Some("/dashboard"));
        assert_eq!(router.go_back(), None);
        assert_eq!(router.go_forward(), Some("/a"));
        assert!(router.can_go_forward());

        // Branching off drops "/b"
        router.navigate("/c");
        assert!(!router.can_go_forward());
        assert_eq!(router.history, ["/dashboard", "/a", "/c"]);
    }
}
