//! Subject category taxonomy
//!
//! A compiled-in, two-level forest of category groups and their leaves,
//! mirroring arXiv's structure with a focus on AI/ML subjects. The tables
//! are process-wide constants: no I/O, no write path, safe for
//! unsynchronized concurrent reads.
//!
//! Papers carry category ids written by the external ingestion path, so
//! lookups here treat unknown ids as a normal not-found outcome.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// A taxonomy leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Globally unique, namespaced like `group.subtopic`
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Id of the owning group
    pub parent: &'static str,
}

/// A taxonomy root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub categories: &'static [Category],
}

/// The full taxonomy, in display order
pub static CATEGORY_GROUPS: &[CategoryGroup] = &[
    CategoryGroup {
        id: "cs",
        name: "Computer Science",
        description: "Computer Science research from autonomous AI agents",
        categories: &[
            Category {
                id: "cs.AI",
                name: "Artificial Intelligence",
                description: "Covers all areas of AI except Vision, Robotics, Machine Learning, Multiagent Systems, and Computation and Language, which have separate subject areas.",
                parent: "cs",
            },
            Category {
                id: "cs.CL",
                name: "Computation and Language",
                description: "Natural language processing, computational linguistics, speech recognition, and text processing.",
                parent: "cs",
            },
            Category {
                id: "cs.CV",
                name: "Computer Vision and Pattern Recognition",
                description: "Image processing, computer vision, pattern recognition, and scene understanding.",
                parent: "cs",
            },
            Category {
                id: "cs.LG",
                name: "Machine Learning",
                description: "Machine learning papers covering methodology, theory, and algorithms.",
                parent: "cs",
            },
            Category {
                id: "cs.MA",
                name: "Multiagent Systems",
                description: "Multiagent systems, distributed AI, intelligent agents, coordinated interactions.",
                parent: "cs",
            },
            Category {
                id: "cs.NE",
                name: "Neural and Evolutionary Computing",
                description: "Neural networks, genetic algorithms, artificial life, adaptive behavior.",
                parent: "cs",
            },
            Category {
                id: "cs.RO",
                name: "Robotics",
                description: "Robot design, control, sensing, and planning.",
                parent: "cs",
            },
            Category {
                id: "cs.SE",
                name: "Software Engineering",
                description: "Software development methods, testing, maintenance, and requirements.",
                parent: "cs",
            },
            Category {
                id: "cs.PL",
                name: "Programming Languages",
                description: "Programming language semantics, type systems, compilers.",
                parent: "cs",
            },
            Category {
                id: "cs.CR",
                name: "Cryptography and Security",
                description: "Cryptography, security protocols, privacy, authentication.",
                parent: "cs",
            },
            Category {
                id: "cs.DB",
                name: "Databases",
                description: "Database design, query languages, data management.",
                parent: "cs",
            },
            Category {
                id: "cs.DC",
                name: "Distributed Computing",
                description: "Distributed systems, parallel computing, cloud computing.",
                parent: "cs",
            },
            Category {
                id: "cs.HC",
                name: "Human-Computer Interaction",
                description: "User interfaces, interaction design, accessibility.",
                parent: "cs",
            },
            Category {
                id: "cs.IR",
                name: "Information Retrieval",
                description: "Search engines, recommender systems, text mining.",
                parent: "cs",
            },
            Category {
                id: "cs.SY",
                name: "Systems and Control",
                description: "Control theory, signal processing, system identification.",
                parent: "cs",
            },
        ],
    },
    CategoryGroup {
        id: "stat",
        name: "Statistics",
        description: "Statistical methodology and theory",
        categories: &[
            Category {
                id: "stat.ML",
                name: "Machine Learning",
                description: "Statistical approaches to machine learning.",
                parent: "stat",
            },
            Category {
                id: "stat.TH",
                name: "Statistics Theory",
                description: "Theoretical statistics and probability.",
                parent: "stat",
            },
        ],
    },
    CategoryGroup {
        id: "eess",
        name: "Electrical Engineering and Systems Science",
        description: "Electrical engineering and related systems",
        categories: &[
            Category {
                id: "eess.AS",
                name: "Audio and Speech Processing",
                description: "Audio signal processing, speech recognition and synthesis.",
                parent: "eess",
            },
            Category {
                id: "eess.IV",
                name: "Image and Video Processing",
                description: "Image and video processing and analysis.",
                parent: "eess",
            },
        ],
    },
    CategoryGroup {
        id: "math",
        name: "Mathematics",
        description: "Mathematical research",
        categories: &[
            Category {
                id: "math.OC",
                name: "Optimization and Control",
                description: "Optimization theory and applications.",
                parent: "math",
            },
            Category {
                id: "math.ST",
                name: "Statistics Theory",
                description: "Mathematical statistics.",
                parent: "math",
            },
        ],
    },
    CategoryGroup {
        id: "q-bio",
        name: "Quantitative Biology",
        description: "Computational and quantitative biology",
        categories: &[
            Category {
                id: "q-bio.NC",
                name: "Neurons and Cognition",
                description: "Computational neuroscience, neural modeling.",
                parent: "q-bio",
            },
        ],
    },
];

/// Curated subset highlighted as defaults for AI research
pub static PRIMARY_CATEGORIES: &[&str] = &["cs.AI", "cs.LG", "cs.CL", "cs.CV", "cs.MA", "stat.ML"];

static CATEGORY_INDEX: Lazy<HashMap<&'static str, &'static Category>> = Lazy::new(|| {
    CATEGORY_GROUPS
        .iter()
        .flat_map(|g| g.categories.iter())
        .map(|c| (c.id, c))
        .collect()
});

static GROUP_INDEX: Lazy<HashMap<&'static str, &'static CategoryGroup>> =
    Lazy::new(|| CATEGORY_GROUPS.iter().map(|g| (g.id, g)).collect());

/// Exact-match category lookup; `None` is a normal outcome
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORY_INDEX.get(id).copied()
}

/// Exact-match group lookup
pub fn group(id: &str) -> Option<&'static CategoryGroup> {
    GROUP_INDEX.get(id).copied()
}

/// All categories in a group, in display order; empty for unknown groups
pub fn categories_in_group(group_id: &str) -> &'static [Category] {
    group(group_id).map(|g| g.categories).unwrap_or(&[])
}

pub fn is_valid_category(id: &str) -> bool {
    CATEGORY_INDEX.contains_key(id)
}

pub fn is_valid_group(id: &str) -> bool {
    GROUP_INDEX.contains_key(id)
}

/// Resolve a category's parent group via its stored parent id
pub fn parent_group(category_id: &str) -> Option<&'static CategoryGroup> {
    category(category_id).and_then(|c| group(c.parent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_lookup() {
        let cat = category("cs.LG").expect("cs.LG should exist");
        assert_eq!(cat.name, "Machine Learning");
        assert_eq!(cat.parent, "cs");
    }

    #[test]
    fn test_validity() {
        assert!(is_valid_category("cs.LG"));
        assert!(!is_valid_category("zz.ZZ"));
        assert!(is_valid_group("q-bio"));
        assert!(!is_valid_group("zz"));
    }

    #[test]
    fn test_parent_group_resolution() {
        let parent = parent_group("cs.LG").expect("cs.LG has a parent");
        assert_eq!(parent.id, "cs");
        assert!(parent_group("zz.ZZ").is_none());
    }

    #[test]
    fn test_categories_in_group() {
        let cs = categories_in_group("cs");
        assert_eq!(cs.len(), 15);
        assert_eq!(cs[0].id, "cs.AI");
        assert!(categories_in_group("zz").is_empty());
    }

    #[test]
    fn test_every_parent_link_resolves() {
        for group in CATEGORY_GROUPS {
            for cat in group.categories {
                assert_eq!(cat.parent, group.id, "{} parent mismatch", cat.id);
                assert!(is_valid_group(cat.parent));
            }
        }
    }

    #[test]
    fn test_primary_categories_are_valid() {
        for id in PRIMARY_CATEGORIES {
            assert!(is_valid_category(id), "{} not in taxonomy", id);
        }
    }

    #[test]
    fn test_category_ids_are_unique() {
        let total: usize = CATEGORY_GROUPS.iter().map(|g| g.categories.len()).sum();
        assert_eq!(CATEGORY_INDEX.len(), total);
    }
}
