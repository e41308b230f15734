use serde_json::Value;

use crate::models::Params;

pub const PLACEHOLDER: &str = "N/A";

const CLOSING: &str =
    "Format your response in a clear, educational manner suitable for engineering students.";

// one line of the parameter/result listing
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    // appended verbatim after the value, e.g. " bps" or "%"
    pub suffix: &'static str,
}

const fn field(key: &'static str, label: &'static str, suffix: &'static str) -> Field {
    Field { key, label, suffix }
}

#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub expertise: &'static str,
    pub subject: &'static str,
    pub inputs: &'static [Field],
    pub results: &'static [Field],
    pub points: &'static [&'static str],
}

impl Template {
    pub fn render(&self, inputs: &Params, results: &Params) -> String {
        let mut out = format!(
            "\nYou are an expert in {}. Provide a detailed, educational explanation for the following {} calculation:\n",
            self.expertise, self.subject
        );

        out.push_str("\n**Input Parameters:**\n");
        render_fields(&mut out, self.inputs, inputs);

        out.push_str("\n**Calculated Results:**\n");
        render_fields(&mut out, self.results, results);

        out.push_str("\nPlease explain:\n");
        for (i, point) in self.points.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, point));
        }

        out.push_str(&format!("\n{CLOSING}\n"));
        out
    }
}

fn render_fields(out: &mut String, fields: &[Field], values: &Params) {
    for f in fields {
        out.push_str(&format!("- {}: {}{}\n", f.label, lookup(values, f.key), f.suffix));
    }
}

// natural string form of a parameter, N/A when missing or null.
// numbers keep the text they were sent with (serde_json arbitrary_precision)
pub fn lookup(values: &Params, key: &str) -> String {
    match values.get(key) {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub const WIRELESS_COMM: Template = Template {
    expertise: "wireless communication systems",
    subject: "wireless communication system",
    inputs: &[
        field("sourceDataRate", "Source Data Rate", " bps"),
        field("samplingRate", "Sampling Rate", " Hz"),
        field("quantizationBits", "Quantization Bits", ""),
        field("sourceCompressionRatio", "Source Compression Ratio", ""),
        field("channelCodeRate", "Channel Code Rate", ""),
        field("interleavingFactor", "Interleaving Factor", ""),
        field("burstOverhead", "Burst Overhead", "%"),
    ],
    results: &[
        field("samplerOutput", "Sampler Output", " bps"),
        field("quantizerOutput", "Quantizer Output", " bps"),
        field("sourceEncoderOutput", "Source Encoder Output", " bps"),
        field("channelEncoderOutput", "Channel Encoder Output", " bps"),
        field("interleaverOutput", "Interleaver Output", " bps"),
        field("burstFormatterOutput", "Burst Formatter Output", " bps"),
    ],
    points: &[
        "The purpose and function of each processing block in the wireless communication system",
        "How each calculation is performed step-by-step with the given parameters",
        "The significance of each result in the context of wireless communication",
        "Any important considerations or trade-offs in the system design",
    ],
};

pub const OFDM: Template = Template {
    expertise: "OFDM (Orthogonal Frequency Division Multiplexing) systems",
    subject: "OFDM system",
    inputs: &[
        field("subcarrierSpacing", "Subcarrier Spacing", " kHz"),
        field("symbolDuration", "Symbol Duration", " μs"),
        field("cyclicPrefixLength", "Cyclic Prefix Length", " μs"),
        field("modulationScheme", "Modulation Scheme", ""),
        field("numSubcarriers", "Number of Subcarriers", ""),
        field("numResourceBlocks", "Number of Resource Blocks", ""),
        field("subcarriersPerRB", "Subcarriers per Resource Block", ""),
        field("parallelRBs", "Parallel Resource Blocks", ""),
    ],
    results: &[
        field("resourceElementRate", "Resource Element Rate", " kbps"),
        field("ofdmSymbolRate", "OFDM Symbol Rate", " Mbps"),
        field("resourceBlockRate", "Resource Block Rate", " kbps"),
        field("maxTransmissionCapacity", "Maximum Transmission Capacity", " Mbps"),
        field("spectralEfficiency", "Spectral Efficiency", " bps/Hz"),
    ],
    points: &[
        "The fundamental concepts of OFDM and its advantages",
        "The role of resource elements, symbols, and resource blocks",
        "How each calculation is performed with mathematical formulas",
        "The impact of cyclic prefix and modulation scheme on performance",
        "The significance of spectral efficiency in OFDM systems",
    ],
};

pub const LINK_BUDGET: Template = Template {
    expertise: "wireless link budget analysis",
    subject: "link budget",
    inputs: &[
        field("transmitterPower", "Transmitter Power", " dBm"),
        field("transmitterGain", "Transmitter Antenna Gain", " dBi"),
        field("receiverGain", "Receiver Antenna Gain", " dBi"),
        field("frequency", "Operating Frequency", " GHz"),
        field("distance", "Distance", " km"),
        field("pathLossModel", "Path Loss Model", ""),
        field("additionalLosses", "Additional Losses", " dB"),
        field("noiseFloor", "Noise Floor", " dBm"),
        field("requiredSNR", "Required SNR", " dB"),
    ],
    results: &[
        field("transmittedPowerDbm", "Transmitted Power", " dBm"),
        field("pathLossDb", "Path Loss", " dB"),
        field("receivedPowerDbm", "Received Power", " dBm"),
        field("linkMarginDb", "Link Margin", " dB"),
        field("linkStatus", "Link Status", ""),
    ],
    points: &[
        "The fundamental principles of link budget analysis",
        "How path loss is calculated using the specified model",
        "The step-by-step calculation of received power",
        "The importance of link margin and its interpretation",
        "Factors affecting link performance and design recommendations",
    ],
};

pub const CELLULAR_DESIGN: Template = Template {
    expertise: "cellular network design",
    subject: "cellular system design",
    inputs: &[
        field("coverageArea", "Coverage Area", " km²"),
        field("userDensity", "User Density", " users/km²"),
        field("trafficPerUser", "Traffic per User", " Erlang"),
        field("frequencyBand", "Operating Frequency", " GHz"),
        field("channelBandwidth", "Total Bandwidth", " MHz"),
        field("reusePattern", "Frequency Reuse Pattern", ""),
        field("sectorization", "Sectorization", " sectors per cell"),
        field("linkBudgetRange", "Maximum Cell Range", " km"),
        field("interferenceMargin", "Interference Margin", " dB"),
        field("fadingMargin", "Fading Margin", " dB"),
    ],
    results: &[
        field("numCells", "Number of Cells", ""),
        field("cellRadius", "Cell Radius", " km"),
        field("totalUsers", "Total Users", ""),
        field("totalTraffic", "Total Traffic", " Erlang"),
        field("channelsPerCell", "Channels per Cell", ""),
        field("capacityPerCell", "Capacity per Cell", " Erlang"),
        field("spectralEfficiency", "Spectral Efficiency", "%"),
        field("reuseEfficiency", "Reuse Efficiency", "%"),
    ],
    points: &[
        "The principles of cellular network design and frequency reuse",
        "Coverage vs. capacity analysis and which factor is limiting",
        "The role of sectorization in improving system performance",
        "How Erlang traffic theory applies to cellular systems",
        "The trade-offs between cell size, capacity, and interference",
    ],
};

pub fn wireless_comm(inputs: &Params, results: &Params) -> String {
    WIRELESS_COMM.render(inputs, results)
}

pub fn ofdm(inputs: &Params, results: &Params) -> String {
    OFDM.render(inputs, results)
}

pub fn link_budget(inputs: &Params, results: &Params) -> String {
    LINK_BUDGET.render(inputs, results)
}

pub fn cellular_design(inputs: &Params, results: &Params) -> String {
    CELLULAR_DESIGN.render(inputs, results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(v: Value) -> Params {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    const ALL: [Template; 4] = [WIRELESS_COMM, OFDM, LINK_BUDGET, CELLULAR_DESIGN];

    #[test]
    fn test_empty_maps_use_placeholder_everywhere() {
        let empty = Params::new();
        for t in ALL {
            let prompt = t.render(&empty, &empty);
            assert!(!prompt.is_empty());
            for f in t.inputs.iter().chain(t.results) {
                let line = format!("- {}: N/A{}", f.label, f.suffix);
                assert!(prompt.contains(&line), "missing `{line}` in {}", t.subject);
            }
        }
    }

    #[test]
    fn test_wireless_source_rate() {
        let inputs = params(json!({"sourceDataRate": 64000}));
        let prompt = wireless_comm(&inputs, &Params::new());

        assert!(prompt.contains("- Source Data Rate: 64000 bps"));
        assert!(prompt.contains("- Sampling Rate: N/A Hz"));
        for f in WIRELESS_COMM.results {
            assert!(prompt.contains(&format!("- {}: N/A bps", f.label)));
        }
    }

    #[test]
    fn test_values_rendered_as_provided() {
        let inputs = params(json!({
            "transmitterPower": 43.0,
            "distance": 2.5,
            "pathLossModel": "Free Space",
            "noiseFloor": -100,
            "requiredSNR": null,
        }));
        let results = params(json!({"linkStatus": "PASS", "linkMarginDb": 12.3456789}));
        let prompt = link_budget(&inputs, &results);

        assert!(prompt.contains("- Transmitter Power: 43.0 dBm"));
        assert!(prompt.contains("- Distance: 2.5 km"));
        assert!(prompt.contains("- Path Loss Model: Free Space\n"));
        assert!(prompt.contains("- Noise Floor: -100 dBm"));
        assert!(prompt.contains("- Required SNR: N/A dB"));
        assert!(prompt.contains("- Link Status: PASS\n"));
        assert!(prompt.contains("- Link Margin: 12.3456789 dB"));
    }

    #[test]
    fn test_numbers_keep_request_text() {
        let inputs: Params = serde_json::from_str(
            r#"{"sourceDataRate": 100000000000000000000, "samplingRate": 1e3, "quantizationBits": 8.50}"#,
        )
        .unwrap();
        let prompt = wireless_comm(&inputs, &Params::new());

        assert!(prompt.contains("- Source Data Rate: 100000000000000000000 bps"));
        assert!(prompt.contains("- Sampling Rate: 1e3 Hz"));
        assert!(prompt.contains("- Quantization Bits: 8.50\n"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let inputs = params(json!({"somethingElse": 1}));
        let prompt = ofdm(&inputs, &Params::new());
        assert!(!prompt.contains("somethingElse"));
        assert!(prompt.contains("- Subcarrier Spacing: N/A kHz"));
    }

    #[test]
    fn test_layout() {
        let prompt = cellular_design(&Params::new(), &Params::new());
        assert!(prompt.starts_with("\nYou are an expert in cellular network design."));
        assert!(prompt.contains("**Input Parameters:**"));
        assert!(prompt.contains("**Calculated Results:**"));
        assert!(prompt.contains("1. The principles of cellular network design"));
        assert!(prompt.contains("5. The trade-offs between cell size"));
        assert!(prompt.trim_end().ends_with("suitable for engineering students."));
    }

    #[test]
    fn test_render_is_deterministic() {
        let inputs = params(json!({"coverageArea": 100, "reusePattern": "7"}));
        let results = params(json!({"numCells": 42}));
        assert_eq!(
            cellular_design(&inputs, &results),
            cellular_design(&inputs, &results)
        );
    }

    #[test]
    fn test_lookup_compound_values() {
        let values = params(json!({"flag": true, "list": [1, 2]}));
        assert_eq!(lookup(&values, "flag"), "true");
        assert_eq!(lookup(&values, "list"), "[1,2]");
        assert_eq!(lookup(&values, "missing"), PLACEHOLDER);
    }
}
