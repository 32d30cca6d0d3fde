//! Navigation Model
//!
//! Declarative route table plus the screen stack, drawer and list
//! selections.

/// Every screen the app can show
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Directory,
    CampsiteInfo(u32),
    Reservation,
    About,
    Contact,
    Favorites,
}

/// Header and drawer chrome for a screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenChrome {
    pub title: &'static str,
    /// None for stack-only screens that are not in the drawer
    pub drawer_label: Option<&'static str>,
    pub icon: &'static str,
}

impl Screen {
    /// Drawer entries, top to bottom
    pub const DRAWER: [Screen; 6] = [
        Screen::Home,
        Screen::Directory,
        Screen::Reservation,
        Screen::About,
        Screen::Contact,
        Screen::Favorites,
    ];

    pub const INITIAL: Screen = Screen::Home;

    pub fn chrome(&self) -> ScreenChrome {
        match self {
            Screen::Home => ScreenChrome {
                title: "Home",
                drawer_label: Some("Home"),
                icon: "⌂",
            },
            Screen::Directory => ScreenChrome {
                title: "Directory",
                drawer_label: Some("Directory"),
                icon: "☰",
            },
            Screen::CampsiteInfo(_) => ScreenChrome {
                title: "Campsite Information",
                drawer_label: None,
                icon: "⛺",
            },
            Screen::Reservation => ScreenChrome {
                title: "Reserve Campsite",
                drawer_label: Some("Reserve Campsite"),
                icon: "♣",
            },
            Screen::About => ScreenChrome {
                title: "About Us",
                drawer_label: Some("About Us"),
                icon: "ℹ",
            },
            Screen::Contact => ScreenChrome {
                title: "Contact Us",
                drawer_label: Some("Contact Us"),
                icon: "✉",
            },
            Screen::Favorites => ScreenChrome {
                title: "My Favorites",
                drawer_label: Some("My Favorites"),
                icon: "♥",
            },
        }
    }

    /// Drawer entry a screen belongs to
    pub fn root(&self) -> Screen {
        match self {
            Screen::CampsiteInfo(_) => Screen::Directory,
            other => *other,
        }
    }

    pub fn drawer_index(&self) -> usize {
        let root = self.root();
        Self::DRAWER.iter().position(|s| *s == root).unwrap_or(0)
    }
}

/// Navigation state (screen stack, drawer, selections)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Screen stack; never empty, last element is visible
    stack: Vec<Screen>,

    /// Whether the drawer menu is open
    pub drawer_open: bool,

    /// Highlighted drawer entry
    pub drawer_selection: usize,

    /// Selected campsite in the directory list
    pub directory_selection: Option<usize>,

    /// Selected entry in the favorites list
    pub favorites_selection: Option<usize>,

    /// Scroll offset of the comments panel
    pub comments_scroll: u16,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::INITIAL],
            drawer_open: false,
            drawer_selection: Screen::INITIAL.drawer_index(),
            directory_selection: None,
            favorites_selection: None,
            comments_scroll: 0,
        }
    }

    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::INITIAL)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Push a stack child (e.g. campsite details over the directory)
    pub fn push(&mut self, screen: Screen) {
        if matches!(screen, Screen::CampsiteInfo(_)) {
            self.comments_scroll = 0;
        }
        self.stack.push(screen);
    }

    /// Pop the top screen; returns false at the root
    pub fn pop(&mut self) -> bool {
        if self.can_go_back() {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Replace the stack with a drawer root
    pub fn navigate_root(&mut self, screen: Screen) {
        let root = screen.root();
        self.stack.clear();
        self.stack.push(root);
        self.drawer_selection = root.drawer_index();
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
        if self.drawer_open {
            self.drawer_selection = self.current().drawer_index();
        }
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_route_is_home() {
        let nav = NavigationModel::new();
        assert_eq!(nav.current(), Screen::Home);
        assert_eq!(nav.depth(), 1);
        assert!(!nav.drawer_open);
    }

    #[test]
    fn test_campsite_info_is_stack_child_of_directory() {
        let chrome = Screen::CampsiteInfo(3).chrome();
        assert_eq!(chrome.title, "Campsite Information");
        assert!(chrome.drawer_label.is_none());
        assert_eq!(Screen::CampsiteInfo(3).root(), Screen::Directory);
    }

    #[test]
    fn test_drawer_labels() {
        let labels: Vec<&str> = Screen::DRAWER
            .iter()
            .filter_map(|s| s.chrome().drawer_label)
            .collect();
        assert_eq!(
            labels,
            vec!["Home", "Directory", "Reserve Campsite", "About Us", "Contact Us", "My Favorites"]
        );
    }

    #[test]
    fn test_push_and_pop() {
        let mut nav = NavigationModel::new();
        nav.navigate_root(Screen::Directory);
        nav.push(Screen::CampsiteInfo(1));
        assert_eq!(nav.current(), Screen::CampsiteInfo(1));
        assert!(nav.pop());
        assert_eq!(nav.current(), Screen::Directory);
        assert!(!nav.pop());
        assert_eq!(nav.current(), Screen::Directory);
    }

    #[test]
    fn test_navigate_root_resets_stack_and_closes_drawer() {
        let mut nav = NavigationModel::new();
        nav.navigate_root(Screen::Directory);
        nav.push(Screen::CampsiteInfo(2));
        nav.toggle_drawer();
        assert!(nav.drawer_open);

        nav.navigate_root(Screen::Favorites);
        assert_eq!(nav.current(), Screen::Favorites);
        assert_eq!(nav.depth(), 1);
        assert!(!nav.drawer_open);
        assert_eq!(nav.drawer_selection, 5);
    }

    #[test]
    fn test_toggle_drawer_highlights_current_root() {
        let mut nav = NavigationModel::new();
        nav.navigate_root(Screen::Directory);
        nav.push(Screen::CampsiteInfo(9));
        nav.toggle_drawer();
        assert_eq!(nav.drawer_selection, 1);
    }
}
