use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;
use crate::models::Params;
use crate::prompt;

// pure prompt builder: (inputs, results) -> prompt text
pub type PromptBuilder = fn(&Params, &Params) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    WirelessComm,
    Ofdm,
    LinkBudget,
    CellularDesign,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::WirelessComm,
        Scenario::Ofdm,
        Scenario::LinkBudget,
        Scenario::CellularDesign,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Scenario::WirelessComm => "wireless_comm",
            Scenario::Ofdm => "ofdm",
            Scenario::LinkBudget => "link_budget",
            Scenario::CellularDesign => "cellular_design",
        }
    }

    pub fn prompt_builder(self) -> PromptBuilder {
        match self {
            Scenario::WirelessComm => prompt::wireless_comm,
            Scenario::Ofdm => prompt::ofdm,
            Scenario::LinkBudget => prompt::link_budget,
            Scenario::CellularDesign => prompt::cellular_design,
        }
    }

    pub fn build_prompt(self, inputs: &Params, results: &Params) -> String {
        (self.prompt_builder())(inputs, results)
    }

    // link_budget -> Link Budget
    pub fn display_name(self) -> String {
        title_case(&self.tag().replace('_', " "))
    }
}

impl FromStr for Scenario {
    type Err = ApiError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|s| s.tag() == tag)
            .ok_or(ApiError::InvalidScenario)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
