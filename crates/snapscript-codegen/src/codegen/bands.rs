//! Target band descriptor codegen

use super::{Block, literal};
use crate::value::{BandMap, TARGET_BANDS};

const BAND_DESCRIPTOR_TYPE: &str = "org.esa.snap.core.gpf.common.BandMathsOp$BandDescriptor";

/// Helper for generating `BandDescriptor` objects and their array
pub struct BandsCodegen;

impl BandsCodegen {
    /// Construct one descriptor per band, collect them in a Java array and
    /// put the array into `parameters`
    pub fn generate(block: &mut Block<'_>, bands: &BandMap) {
        block.blank();
        block.line("# create target bands object");
        block.line(format!(
            "BandDescriptor = jpy.get_type({})",
            literal::quote(BAND_DESCRIPTOR_TYPE)
        ));

        for (name, band) in bands.iter() {
            block.blank();
            block.line(format!("{} = BandDescriptor()", name));

            let quoted = [
                ("name", &band.name),
                ("type", &band.band_type),
                ("expression", &band.expression),
                ("description", &band.description),
                ("unit", &band.unit),
            ];
            for (field, value) in quoted {
                if let Some(value) = value {
                    block.line(format!("{}.{} = {}", name, field, literal::quote(value)));
                }
            }
            if let Some(value) = &band.no_data_value {
                block.line(format!("{}.noDataValue = {}", name, value));
            }
        }

        block.blank();
        block.line(format!(
            "{} = jpy.array({}, {})",
            TARGET_BANDS,
            literal::quote(BAND_DESCRIPTOR_TYPE),
            bands.len()
        ));
        for (index, (name, _)) in bands.iter().enumerate() {
            block.line(format!("{}[{}] = {}", TARGET_BANDS, index, name));
        }

        block.blank();
        block.line(format!(
            "parameters.put({}, {})",
            literal::quote(TARGET_BANDS),
            TARGET_BANDS
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslateOptions;
    use crate::value::BandDescriptor;

    #[test]
    fn test_generate_bands() {
        let mut bands = BandMap::new();
        bands.push(BandDescriptor {
            name: Some("ndvi".into()),
            band_type: Some("float32".into()),
            expression: Some("(B8 - B4) / (B8 + B4)".into()),
            no_data_value: Some("-1".into()),
            ..Default::default()
        });
        bands.push(BandDescriptor {
            name: Some("mask".into()),
            ..Default::default()
        });

        let options = TranslateOptions::default();
        let mut block = Block::new(&options);
        BandsCodegen::generate(&mut block, &bands);

        let expected = vec![
            "",
            "# create target bands object",
            "BandDescriptor = jpy.get_type('org.esa.snap.core.gpf.common.BandMathsOp$BandDescriptor')",
            "",
            "targetBand1 = BandDescriptor()",
            "targetBand1.name = 'ndvi'",
            "targetBand1.type = 'float32'",
            "targetBand1.expression = '(B8 - B4) / (B8 + B4)'",
            "targetBand1.noDataValue = -1",
            "",
            "targetBand2 = BandDescriptor()",
            "targetBand2.name = 'mask'",
            "",
            "targetBands = jpy.array('org.esa.snap.core.gpf.common.BandMathsOp$BandDescriptor', 2)",
            "targetBands[0] = targetBand1",
            "targetBands[1] = targetBand2",
            "",
            "parameters.put('targetBands', targetBands)",
        ];
        assert_eq!(block.into_lines(), expected);
    }

    #[test]
    fn test_empty_band_structure() {
        let options = TranslateOptions::default();
        let mut block = Block::new(&options);
        BandsCodegen::generate(&mut block, &BandMap::new());
        let lines = block.into_lines();
        assert!(lines.contains(
            &"targetBands = jpy.array('org.esa.snap.core.gpf.common.BandMathsOp$BandDescriptor', 0)"
                .to_string()
        ));
        assert!(!lines.iter().any(|l| l.contains("BandDescriptor()")));
    }
}
