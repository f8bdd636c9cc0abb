//! Embedded library of named tilings
//!
//! Groups follow the k-uniform classification. Every rule string here parses
//! under the default [`GenerationConfig`](crate::io::configuration::GenerationConfig).

/// Named tiling with its rule string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Common name, when the tiling has one
    pub name: Option<&'static str>,
    /// Expected Cundy-Rollett notation, when known
    pub notation: Option<&'static str>,
    /// Rule string
    pub rule: &'static str,
    /// Name of the dual tiling, when it has one
    pub dual_name: Option<&'static str>,
}

/// Group of related tilings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogGroup {
    /// Short identifier
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Whether the group's tilings have meaningful duals
    pub dual: bool,
    /// Tilings in display order
    pub entries: &'static [CatalogEntry],
}

const fn entry(
    name: Option<&'static str>,
    notation: Option<&'static str>,
    rule: &'static str,
    dual_name: Option<&'static str>,
) -> CatalogEntry {
    CatalogEntry {
        name,
        notation,
        rule,
        dual_name,
    }
}

/// Every catalog group in display order
pub static CATALOG: &[CatalogGroup] = &[
    CatalogGroup {
        id: "1Ur",
        title: "1-Uniform (Regular)",
        dual: true,
        entries: &[
            entry(Some("triangular"), Some("3^6"), "3/r60/r(h2)", Some("hexagonal")),
            entry(Some("square"), Some("4^4"), "4-4-0,4/r90/m(v2)", Some("square")),
            entry(Some("hexagonal"), Some("6^3"), "6/r60/r(h1)", Some("triangular")),
        ],
    },
    CatalogGroup {
        id: "1Usr",
        title: "1-Uniform (Semiregular)",
        dual: true,
        entries: &[
            entry(Some("Truncated hexagonal"), Some("3.12^2"), "12-3/m30/r(h3)", Some("triakis triangular")),
            entry(Some("Rhombitrihexagonal"), Some("3.4.6.4"), "6-4-3/m30/r(c2)", Some("deltoidal trihexagonal")),
            entry(Some("Truncated trihexagonal"), Some("4.6.12"), "12-6,4/m30/r(c2)", Some("kisrhombille")),
            entry(Some("Trihexagonal"), Some("(3.6)^2"), "6-3-6/m30/r(v4)", Some("rhombille")),
            entry(Some("Truncated square"), Some("4.8^2"), "8-4/m90/r(h4)", Some("tetrakis square")),
            entry(Some("Snub square"), Some("3^2.4.3.4"), "4-3-3,0,0,0,4/r90/r(h2)", Some("cairo pentagonal")),
            entry(Some("Elongated triangular"), Some("3^3.4^2"), "4-3/m90/r(h2)", Some("prismatic pentagonal")),
            entry(Some("Snub trihexagonal"), Some("3^4.6"), "6-3-3/r60/r(h5)", Some("floret pentagonal")),
        ],
    },
    CatalogGroup {
        id: "2U",
        title: "2-Uniform",
        dual: true,
        entries: &[
            entry(Some("Rhombitrihexagonal"), Some("3^6;3^2.4.3.4"), "3-0,4-0,3/m30/r(c3)", None),
            entry(Some("Truncated hexagonal (dissected a)"), Some("3.4.6.4;3^2.4.3.4"), "6-4-3,3/m30/r(h1)", None),
            entry(Some("Truncated hexagonal (dissected b)"), Some("3.4.6.4;3^3.4^2"), "6-4-3-3/m30/r(h5)", None),
            entry(None, Some("3.4.6.4;3.4^2.6"), "6-4-3,4-6/m30/r(c4)", None),
            entry(None, None, "6-3/r120/m(h1)", None),
            entry(Some("Diminished rhombitrihexagonal"), Some("4.6.12;3.4.6.4"), "12-4,6-3/m30/r(c3)", None),
            entry(None, Some("3^6;3^2.4.12"), "12-3,4-3/m30/r(c3)", None),
            entry(None, Some("3.12^2;3.4.3.12"), "12-0,3,3-0,0,4/r90/r(h1)", None),
            entry(Some("hexagonal (2/3 dissected)"), Some("[3^6;3^4.6]_1"), "6-3,3-3/m30/r(h1)", None),
            entry(None, Some("[3^6;3^4.6]_2"), "6-3-3,3-0,3/r60/r(h8)", None),
            entry(None, Some("3^2.6^2;3^4.6"), "6-3/m90/r(h1)", None),
            entry(None, Some("3.6.3.6;3^2.6^2"), "6-3,6/m90/r(h3)", None),
            entry(None, Some("[3.4^2.6;3.6.3.6]_2"), "6-3,4-6-3,4-6,4/m90/r(c6)", None),
            entry(None, Some("[3.4^2.6;3.6.3.6]_1"), "6-3,4/m90/r(h4)", None),
            entry(None, Some("[3^3.4^2;3^2.4.3.4]_1"), "4-3,3-4,3/r90/m(h3)", None),
            entry(None, Some("[3^3.4^2;3^2.4.3.4]_2"), "4-3,3,3-4,3/r(c2)/r(h13)/r(h45)", None),
            entry(None, Some("[4^4;3^3.4^2]_1"), "4-3/m(h4)/m(h3)/r(h2)", None),
            entry(None, Some("[4^4;3^3.4^2]_2"), "4-4-3-3/m90/r(h3)", None),
            entry(None, Some("[3^6;3^3.4^2]_1"), "4-3,4-3,3/m90/r(h3)", None),
            entry(None, Some("[3^6;3^3.4^2]_2"), "4-3-3-3/m90/r(h7)/r(h5)", None),
        ],
    },
    CatalogGroup {
        id: "3U2",
        title: "3-Uniform (2 Vertex Types)",
        dual: true,
        entries: &[
            entry(None, Some("(3.4.6.4)^2;3.4^2.6"), "6-4-3,4-6,3/m30/r(c2)", None),
            entry(None, Some("[(3^6)^2;3^4.6]_1"), "6-3-3/m30/r(v3)", None),
            entry(None, Some("[(3^6)^2;3^4.6]_2"), "6-3-3-0,3-0,0,3/m30/r(v2)", None),
            entry(None, Some("[(3^6)^2;3^4.6]_3"), "6-3-3-0,3,3-0,3-0,3/r60/r(h7)", None),
            entry(None, Some("3^6;(3^4.6)^2"), "3-0,3,3-0,6/m90/r(h6)", None),
            entry(None, Some("3^6;(3^2.4.3.4)^2"), "3-0,4-0,3,3/m30/m(h2)", None),
            entry(None, Some("(3.4^2.6)^2;3.6.3.6"), "4-6,4-4,3,3/m90/r(h4)", None),
            entry(None, Some("[3.4^2.6;(3.6.3.6)^2]_1"), "4-6,4-0,3,3/m180/r(v1)/r(h25)", None),
            entry(None, Some("[3.4^2.6;(3.6.3.6)^2]_2"), "4-6,4-0,3,3/m90/r(v1)", None),
            entry(None, Some("3^2.6^2;(3.6.3.6)^2"), "6-3,0,3,3,3,3/r(h4)/r(v15)/r(v30)", None),
            entry(None, Some("(3^4.6)^2;3.6.3.6"), "6-3,3-0,3/r180/r(v1)/r(h12)", None),
            entry(None, Some("[3^3.4^2;(4^4)^2]_1"), "4-4-4-3/m90/r(h4)", None),
            entry(None, Some("[3^3.4^2;(4^4)^2]_2"), "4-4-3/r(h6)/m(h5)/r(h3)", None),
            entry(None, Some("[(3^3.4^2)^2;4^4]_1"), "4-4-3-3-4/m90/r(h10)/r(c3)", None),
            entry(None, Some("[(3^3.4^2)^2;4^4]_2"), "4-3,4-3,3-4/m90/r(h3)", None),
            entry(None, Some("(3^3.4^2)^2;3^2.4.3.4"), "4-4,3,4-3,3,3-3,4-3-4/r180/r(h17)/r(h18)", None),
            entry(None, Some("3^3.4^2;(3^2.4.3.4)^2"), "4-3,3-0,4,3/r180/r(h2)/r(h18)", None),
            entry(None, Some("[3^6;(3^3.4^2)^2]_1"), "4-3,0,3-3-3/r(h5)/r(h19)/m(h18)", None),
            entry(None, Some("[3^6;(3^3.4^2)^2]_2"), "4-3,0,3-3/r(h3)/r(h15)/m(h14)", None),
            entry(None, Some("[(3^6)^2;3^3.4^2]_1"), "4-3-3-3-3-3/m90/r(h3)", None),
            entry(None, Some("[(3^6)^2;3^3.4^2]_2"), "4-3-3-3-3/m90/r(h2)/m(h22)", None),
        ],
    },
    CatalogGroup {
        id: "3U3",
        title: "3-Uniform (3 Vertex Types)",
        dual: true,
        entries: &[
            entry(None, None, "12-6,4-3,3,4/m30/r(c5)", None),
            entry(None, None, "3-0,4-0,3,6-0,4/r60/m(c2)", None),
            entry(None, None, "12-3,4,6-3/m60/m(c5)", None),
            entry(None, None, "6-4-3,12,3-3/m30/r(h2)", None),
            entry(None, None, "6-4-3,3-12-0,0,0,3/m30/r(c2)", None),
            entry(None, None, "6-4-3,3-12/r60/r(h10)", None),
            entry(None, None, "12-4,3-6,3-0,0,4/m30/r(h11)", None),
            entry(None, None, "12-3,4-3-3-3/m30/m(h9)", None),
            entry(None, None, "12-3,4-3,3/m30/r(v1)", None),
            entry(None, None, "6-3-3-0,4-0,3-0,0,3/m30/r(h10)", None),
            entry(None, None, "3-0,4-0,3,4-0,6/m30/r(c5)", None),
            entry(None, None, "6-4-3,4-3,3/m30/r(c5)", None),
            entry(None, None, "6-4-3,3-4,3,3-3/r60/r(v5)", None),
            entry(None, None, "3-0,4-0,3-0,3/m30/r(h6)", None),
            entry(None, None, "12-4-3,3/m90/r(h6)", None),
            entry(None, None, "6-4,3-3,0,4-6/m90/r(v5)", None),
            entry(None, None, "6-4,3-3,3,4-0,0,6,3/m90/r(h17)/m(h1)", None),
            entry(None, None, "4-3-3-0,4/r90/r(h3)", None),
            entry(None, None, "4-4-3,4-6/m180/r(c3)/r(h29)", None),
            entry(None, None, "4-4,4-3,4-6/m90/r(c5)/r(v1)", None),
            entry(None, None, "6-3,4-0,4,4-0,0,4/m90/r(h9)", None),
            entry(None, None, "6-4,3,3-4/m(h4)/r180/r(v15)", None),
            entry(None, None, "4-6-3,0,3,4,0,0,3/m90/r(h4)", None),
            entry(None, None, "4-6,4-0,3,3/r(h2)/m90/r(c9)", None),
            entry(None, None, "4-6,4-0,3,3-0,0,3,3/r180/r(c1)/r(h17)", None),
            entry(None, None, "6-6-0,3,3,3/r60/r(h2)", None),
            entry(None, None, "6-6,6,3-0,3,3/m180/r(h8)/r(h49)", None),
            entry(None, None, "6-3-3/m180/r(h3)/r(h15)", None),
            entry(None, None, "3-0,6/m60/m(c2)", None),
            entry(None, None, "6-3-3,3-0,3,3-0,0,3/r(h7)/r(h29)/r(h29)", None),
            entry(None, None, "3-0,3,6-0,3/m180/r(h6)/r(c6)", None),
            entry(None, None, "6-3-3/m90/r(h2)", None),
            entry(None, None, "3-0,3,3-0,3,6,3/m90/r(v1)/r(v15)", None),
            entry(None, None, "3-0,3-0,6-0,0,3/r60/m(c1)", None),
            entry(None, None, "3-0,3-0,6/r60/r(v4)", None),
            entry(None, None, "4-4-3-3/m90/r(h7)/r(v1)", None),
            entry(None, None, "4-4-3-3-3/m90/r(h9)/r(h3)", None),
            entry(None, None, "4-4-3-3-3/m(h9)/r(h1)/r(v1)", None),
            entry(None, None, "4-4-3-3-3/m(h9)/r(h1)/r(h3)", None),
        ],
    },
    CatalogGroup {
        id: "4U",
        title: "4-Uniform",
        dual: true,
        entries: &[
            entry(None, None, "3-0,6-0,0,6,6-0,0,6,6,6/r60/m(c1)", None),
            entry(None, None, "6-6-0,6,3-0,0,3,3/r60/m(c1)", None),
        ],
    },
    CatalogGroup {
        id: "6U",
        title: "6-Uniform",
        dual: true,
        entries: &[
            entry(None, None, "6-6-0,6,6-0,3,3,3,3,0,0,0,0,0,0,0,0,0,0,3/r60/m(v3)", None),
        ],
    },
    CatalogGroup {
        id: "UnC-a",
        title: "Uniform non-Convex (adjustable angles)",
        dual: false,
        entries: &[
            entry(None, None, "6(a)-3/r60/r(h4)", None),
            entry(None, None, "4(a)-4/r90/r(h4)", None),
            entry(None, None, "6-3(a)/r60/r(h2)", None),
            entry(None, None, "3(a)-3-3(a)-0,0,3/r120/t(c2)", None),
        ],
    },
    CatalogGroup {
        id: "UnC-s",
        title: "Uniform non-Convex (specific angles)",
        dual: false,
        entries: &[
            entry(None, None, "4(30)-6-0,4/r90/m(c1)", None),
            entry(None, None, "4(45)-8/r90/m(v5)", None),
            entry(None, None, "12-0,4(60)/m45/m(h1)", None),
            entry(None, None, "8(15)-0,3,0,4(60)-0,3/r90/m(h7)", None),
            entry(None, None, "8(15)-3,3-3,4-0,3/r90/m(h1)", None),
            entry(None, None, "8(15)-3,3-8,4/r90/m(c4)", None),
            entry(None, None, "4(18)-5,5,5,5-0,5,4(18)-0,4(18)/r90/m(c4)", None),
            entry(None, None, "6(30)-0,4,6(90)/r120/m(c1)", None),
            entry(None, None, "6(30)-4/r60/m(c2)", None),
            entry(None, None, "6(80)-9-0,6(80),9/r60/m(c1)", None),
            entry(None, None, "6(60)-6/r60/m(v1)", None),
            entry(None, None, "12-3(30)-12/r60/m(v5)", None),
            entry(None, None, "12(30)-3,3-4,6/m30/m(c2)", None),
            entry(None, None, "12(30)-3,3-0,3/m30/m(h1)", None),
            entry(None, None, "18-0,18,3(40)-0,3(40)/m30/m(c3)", None),
            entry(None, None, "6(60)-6-3/r60/m(c2)", None),
            entry(None, None, "6(75)-8-3(15)/r60/m(c2)", None),
            entry(None, None, "9-3(20),3-9/r120/t(c1)", None),
        ],
    },
];

/// Iterate over every entry of every group
pub fn entries() -> impl Iterator<Item = (&'static CatalogGroup, &'static CatalogEntry)> {
    CATALOG
        .iter()
        .flat_map(|group| group.entries.iter().map(move |entry| (group, entry)))
}

/// Group with the given identifier
pub fn group(id: &str) -> Option<&'static CatalogGroup> {
    CATALOG.iter().find(|group| group.id == id)
}

/// Look an entry up by name (case-insensitive) or by exact rule string
pub fn find(query: &str) -> Option<&'static CatalogEntry> {
    let query = query.trim();
    entries()
        .map(|(_, entry)| entry)
        .find(|entry| entry.name.is_some_and(|name| name.eq_ignore_ascii_case(query)))
        .or_else(|| entries().map(|(_, entry)| entry).find(|entry| entry.rule == query))
}
