use std::fmt;

use crate::error::{Error, Result};

/// A selectable place to launch from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub name: &'static str,
    pub gravity_mps2: f64,
}

/// Selection order is the display order.
pub const BODIES: [Body; 9] = [
    Body {
        name: "Earth",
        gravity_mps2: 9.81,
    },
    Body {
        name: "Moon",
        gravity_mps2: 1.62,
    },
    Body {
        name: "Mars",
        gravity_mps2: 3.72,
    },
    Body {
        name: "Jupiter",
        gravity_mps2: 24.79,
    },
    Body {
        name: "Saturn",
        gravity_mps2: 10.44,
    },
    Body {
        name: "Venus",
        gravity_mps2: 8.87,
    },
    Body {
        name: "Mercury",
        gravity_mps2: 3.7,
    },
    Body {
        name: "Sun",
        gravity_mps2: 274.0,
    },
    Body {
        name: "Pluto",
        gravity_mps2: 0.62,
    },
];

impl Body {
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} m/s²)", self.name, self.gravity_mps2)
    }
}

pub fn default_body() -> &'static Body {
    &BODIES[0]
}

pub fn find_body(name: &str) -> Result<&'static Body> {
    let wanted = name.trim();
    BODIES
        .iter()
        .find(|body| body.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| Error::UnknownBody(wanted.to_string()))
}

pub fn body_index(body: &Body) -> usize {
    BODIES
        .iter()
        .position(|candidate| candidate.name == body.name)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_selection_order() {
        let names: Vec<&str> = BODIES.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            [
                "Earth", "Moon", "Mars", "Jupiter", "Saturn", "Venus", "Mercury", "Sun", "Pluto"
            ]
        );
        assert_eq!(default_body().name, "Earth");
    }

    #[test]
    fn every_gravity_is_positive() {
        assert!(BODIES.iter().all(|b| b.gravity_mps2 > 0.0));
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(find_body("jupiter").unwrap().gravity_mps2, 24.79);
        assert_eq!(find_body("  MOON ").unwrap().gravity_mps2, 1.62);
        assert!(matches!(find_body("Vulcan"), Err(Error::UnknownBody(name)) if name == "Vulcan"));
    }

    #[test]
    fn labels_show_gravity() {
        assert_eq!(BODIES[0].label(), "Earth (9.81 m/s²)");
        assert_eq!(BODIES[7].label(), "Sun (274 m/s²)");
        assert_eq!(BODIES[6].label(), "Mercury (3.7 m/s²)");
    }

    #[test]
    fn index_round_trips_through_catalog() {
        let mars = find_body("mars").unwrap();
        assert_eq!(BODIES[body_index(mars)].name, "Mars");
    }
}
