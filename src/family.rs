use std::fmt;

/// Unicast address family a prefix-limit applies to
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::V4, Family::V6];

    /// Keyword used for this family in Junos configuration
    pub fn junos_keyword(self) -> &'static str {
        match self {
            Family::V4 => "inet",
            Family::V6 => "inet6",
        }
    }

    pub fn from_junos_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "inet" => Some(Family::V4),
            "inet6" => Some(Family::V6),
            _ => None,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let display = match self {
            Family::V4 => "IPv4",
            Family::V6 => "IPv6",
        };
        write!(f, "{}", display)
    }
}

/// One value per address family
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ByFamily<T> {
    pub v4: T,
    pub v6: T,
}

impl<T> ByFamily<T> {
    pub fn new(v4: T, v6: T) -> Self {
        Self { v4, v6 }
    }

    pub fn get(&self, family: Family) -> &T {
        match family {
            Family::V4 => &self.v4,
            Family::V6 => &self.v6,
        }
    }

    pub fn get_mut(&mut self, family: Family) -> &mut T {
        match family {
            Family::V4 => &mut self.v4,
            Family::V6 => &mut self.v6,
        }
    }

    /// (family, value) pairs, IPv4 first
    pub fn iter(&self) -> impl Iterator<Item = (Family, &T)> {
        Family::ALL.iter().map(move |f| (*f, self.get(*f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_junos_keywords() {
        assert_eq!(Family::V4.junos_keyword(), "inet");
        assert_eq!(Family::V6.junos_keyword(), "inet6");
        assert_eq!(Family::from_junos_keyword("inet6"), Some(Family::V6));
        assert_eq!(Family::from_junos_keyword("inet-vpn"), None);
    }

    #[test]
    fn test_by_family() {
        let mut counts = ByFamily::new(1, 2);
        *counts.get_mut(Family::V6) += 1;
        assert_eq!(*counts.get(Family::V6), 3);
        let labels: Vec<_> = counts.iter().map(|(f, c)| format!("{} {}", f, c)).collect();
        assert_eq!(labels, vec!["IPv4 1", "IPv6 3"]);
    }
}
