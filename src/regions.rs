//! Constituency-to-region mapping.

use hashbrown::HashMap;
use tracing::info;

/// Authored parliamentary constituency → member assembly constituencies,
/// per the 2008 ECI delimitation for the Bangalore PCs.
///
/// NOTE: the AC named "Bangalore South" (Electronic City, Begur,
/// Anjanapura) belongs to the Bangalore Rural PC, not Bangalore South PC.
const PC_TO_ACS: &[(&str, &[&str])] = &[
    (
        "Bangalore North",
        &[
            "K.R.Pura",
            "Byatarayanapura",
            "Yeshvanthapura",
            "Dasarahalli",
            "Mahalakshmi Layout",
            "Malleshwaram",
            "Hebbal",
            "Pulakeshinagar(SC)",
            "Yelahanka",
        ],
    ),
    (
        "Bangalore Central",
        &[
            "Shivajinagar",
            "Shanti Nagar",
            "Gandhi Nagar",
            "Rajaji Nagar",
            "Chamrajpet",
            "Chickpet",
            "Sarvagnanagar",
            "C.V. Raman Nagar(SC)",
            "Mahadevapura",
        ],
    ),
    (
        "Bangalore South",
        &[
            "Govindraj Nagar",
            "Vijay Nagar",
            "Basavanagudi",
            "Padmanaba Nagar",
            "B.T.M Layout",
            "Jayanagar",
            "Bommanahalli",
        ],
    ),
    (
        "Bangalore Rural",
        &[
            "Rajarajeshwarinagar",
            "Bangalore South",
            "Anekal (SC)",
            "Magadi",
            "Ramanagaram",
            "Kanakapura",
            "Channapatna",
            "Hosakote",
            "Doddaballapur",
            "Devanahalli (SC)",
            "Nelamangala (SC)",
        ],
    ),
];

/// Inverted index from boundary name to parent region, built once at
/// startup and immutable afterwards.
pub struct RegionTable {
    by_boundary: HashMap<String, String>,
}

impl RegionTable {
    /// Invert an authored `region → members` table for O(1) lookups.
    pub fn from_authored(table: &[(&str, &[&str])]) -> Self {
        let mut by_boundary = HashMap::new();
        for (region, members) in table {
            for member in *members {
                by_boundary.insert((*member).to_string(), (*region).to_string());
            }
        }
        info!("region table built with {} boundary mappings", by_boundary.len());
        Self { by_boundary }
    }

    /// The built-in Bangalore delimitation table.
    pub fn bangalore() -> Self {
        Self::from_authored(PC_TO_ACS)
    }

    /// Parent region for a boundary name. `None` means the table has no
    /// entry, which downstream treats as "no region data", not a failure.
    pub fn map_to_region(&self, boundary_name: &str) -> Option<&str> {
        self.by_boundary
            .get(boundary_name.trim())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_boundary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_boundary.is_empty()
    }
}
