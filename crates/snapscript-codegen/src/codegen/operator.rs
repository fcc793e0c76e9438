//! Generic operator block codegen

use super::{BandsCodegen, Block, literal};
use crate::ir::SourceRef;
use crate::value::{ParamValue, ParameterMap};

/// Parameter whose WKT is turned into an `AUTHORITY:CODE` string
pub const MAP_PROJECTION: &str = "mapProjection";

/// Helper for generating `GPF.createProduct` blocks
pub struct OperatorCodegen;

impl OperatorCodegen {
    /// Build a parameter map and invoke `operator` on the sources, binding
    /// the result to `artifact`
    pub fn generate(
        block: &mut Block<'_>,
        operator: &str,
        artifact: &str,
        params: Option<&ParameterMap>,
        sources: &[SourceRef],
    ) {
        let title = format!("perform {}", operator);
        block.banner(&title);
        block.line("parameters = HashMap()");

        if let Some(params) = params {
            for (key, value) in params.iter() {
                Self::generate_parameter(block, key, value);
            }
        }

        block.blank();
        block.line(format!("# {}", title));
        block.line(format!(
            "{} = GPF.createProduct({}, parameters, {})",
            artifact,
            literal::quote(operator),
            Self::sources_expr(sources)
        ));
        block.progress(&format!("{} is done.", operator));
        block.blank();
    }

    /// Generate the statements that put one parameter into `parameters`
    pub fn generate_parameter(block: &mut Block<'_>, key: &str, value: &ParamValue) {
        let put = |expr: &str| format!("parameters.put({}, {})", literal::quote(key), expr);
        match value {
            ParamValue::Bands(bands) => BandsCodegen::generate(block, bands),
            ParamValue::Bool(b) => block.line(put(literal::boolean(*b))),
            ParamValue::Number(digits) => block.line(put(digits)),
            ParamValue::Text(wkt) if key == MAP_PROJECTION => {
                block.line(format!(
                    "srs = SpatialReference({})",
                    literal::quote(&literal::collapse_newlines(wkt))
                ));
                block.line("srs.AutoIdentifyEPSG()");
                block.line("code = srs.GetAuthorityName(None) + ':' + srs.GetAuthorityCode(None)");
                block.line(put("code"));
            }
            ParamValue::Text(text) => block.line(put(&literal::quote(text))),
        }
    }

    /// A single source by name, otherwise a list of all of them
    pub fn sources_expr(sources: &[SourceRef]) -> String {
        match sources {
            [single] => literal::identifier(single.artifact.as_deref()).to_string(),
            _ => {
                let names: Vec<&str> = sources
                    .iter()
                    .map(|s| literal::identifier(s.artifact.as_deref()))
                    .collect();
                format!("[{}]", names.join(","))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslateOptions;
    use rstest::rstest;

    fn source(artifact: &str) -> SourceRef {
        SourceRef {
            refid: None,
            artifact: Some(artifact.to_string()),
        }
    }

    #[test]
    fn test_generate_resample() {
        let options = TranslateOptions::default();
        let mut params = ParameterMap::new();
        params.insert("targetResolution", ParamValue::coerce("10"));

        let mut block = Block::new(&options);
        OperatorCodegen::generate(
            &mut block,
            "Resample",
            "artifact2",
            Some(&params),
            &[source("artifact1")],
        );

        let expected = vec![
            "####################",
            "# perform Resample",
            "####################",
            "parameters = HashMap()",
            "parameters.put('targetResolution', 10)",
            "",
            "# perform Resample",
            "artifact2 = GPF.createProduct('Resample', parameters, artifact1)",
            "print 'Resample is done.'",
            "",
        ];
        assert_eq!(block.into_lines(), expected);
    }

    #[test]
    fn test_parameter_literals() {
        let options = TranslateOptions::default();
        let mut block = Block::new(&options);
        OperatorCodegen::generate_parameter(&mut block, "copyMetadata", &ParamValue::Bool(true));
        OperatorCodegen::generate_parameter(&mut block, "subSamplingX", &ParamValue::coerce("2.5"));
        OperatorCodegen::generate_parameter(
            &mut block,
            "region",
            &ParamValue::Text("0,0,100,100".into()),
        );
        assert_eq!(
            block.into_lines(),
            vec![
                "parameters.put('copyMetadata', True)",
                "parameters.put('subSamplingX', 2.5)",
                "parameters.put('region', '0,0,100,100')",
            ]
        );
    }

    #[rstest]
    #[case("10")]
    #[case("10.")]
    #[case("0.250")]
    #[case("12345678901234567891")]
    #[case(&"9".repeat(400))]
    fn test_number_written_as_in_document(#[case] digits: &str) {
        let options = TranslateOptions::default();
        let mut block = Block::new(&options);
        OperatorCodegen::generate_parameter(&mut block, "n", &ParamValue::coerce(digits));
        assert_eq!(
            block.into_lines(),
            vec![format!("parameters.put('n', {})", digits)]
        );
    }

    #[test]
    fn test_map_projection() {
        let options = TranslateOptions::default();
        let mut block = Block::new(&options);
        let wkt = "GEOGCS[\"WGS84(DD)\",\n  DATUM[\"WGS84\"]]";
        OperatorCodegen::generate_parameter(
            &mut block,
            MAP_PROJECTION,
            &ParamValue::Text(wkt.into()),
        );
        assert_eq!(
            block.into_lines(),
            vec![
                "srs = SpatialReference('GEOGCS[\"WGS84(DD)\",   DATUM[\"WGS84\"]]')",
                "srs.AutoIdentifyEPSG()",
                "code = srs.GetAuthorityName(None) + ':' + srs.GetAuthorityCode(None)",
                "parameters.put('mapProjection', code)",
            ]
        );
    }

    #[test]
    fn test_sources_expr() {
        assert_eq!(OperatorCodegen::sources_expr(&[source("artifact1")]), "artifact1");
        assert_eq!(
            OperatorCodegen::sources_expr(&[source("artifact1"), source("artifact2")]),
            "[artifact1,artifact2]"
        );
        assert_eq!(OperatorCodegen::sources_expr(&[]), "[]");

        let unresolved = SourceRef {
            refid: Some("later".into()),
            artifact: None,
        };
        assert_eq!(OperatorCodegen::sources_expr(&[unresolved.clone()]), "None");
        assert_eq!(
            OperatorCodegen::sources_expr(&[source("artifact1"), unresolved]),
            "[artifact1,None]"
        );
    }

    #[test]
    fn test_no_parameter_block() {
        let options = TranslateOptions::default();
        let mut block = Block::new(&options);
        OperatorCodegen::generate(&mut block, "Land-Sea-Mask", "artifact4", None, &[]);
        let lines = block.into_lines();
        assert_eq!(lines[3], "parameters = HashMap()");
        assert_eq!(lines[4], "");
        assert_eq!(
            lines[6],
            "artifact4 = GPF.createProduct('Land-Sea-Mask', parameters, [])"
        );
    }
}
