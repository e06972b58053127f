//! Static energy-saving tips.

/// Tips shown in the tips panel, in display order.
pub const ENERGY_SAVING_TIPS: [&str; 10] = [
    "Use LED bulbs instead of incandescent ones",
    "Unplug electronics when not in use",
    "Use natural light whenever possible",
    "Install a programmable thermostat",
    "Use energy-efficient appliances",
    "Clean or replace air filters regularly",
    "Use ceiling fans to reduce AC usage",
    "Seal air leaks around windows and doors",
    "Use power strips to easily turn off multiple devices",
    "Wash clothes in cold water when possible",
];
