//! Fixed option lists offered by the filters sheet and the contribute form.

pub const STYLES: &[&str] = &["Casual", "Formal", "Vintage", "Trendy", "Sporty", "Bohemian"];

pub const COLORS: &[&str] = &[
    "Black", "White", "Blue", "Red", "Green", "Yellow", "Purple", "Pink", "Brown", "Gray",
];

pub const TYPES: &[&str] = &[
    "Jacket",
    "Sweater",
    "Dress",
    "Jeans",
    "Shoes",
    "Shirt",
    "Skirt",
    "Shorts",
    "Pants",
    "Accessories",
];

pub const CONDITIONS: &[&str] = &["Like New", "Excellent", "Good", "Fair"];

/// Bounds of the distance slider, in miles.
pub const MIN_RADIUS_MILES: u32 = 1;
pub const MAX_RADIUS_MILES: u32 = 25;
