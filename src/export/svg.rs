use super::types::{Layer, SvgDocument};
use quick_xml::escape::escape;

/// Fixed presentation attributes applied to every layer path
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            fill: "#fff".to_string(),
            stroke: "#000".to_string(),
            stroke_width: 1.5,
            opacity: 0.5,
        }
    }
}

fn layer_to_svg(layer: &Layer, style: &LayerStyle) -> String {
    let title = escape(layer.title.as_str());
    format!(
        r#"
 <g>
 <title>{title}</title>
 <path fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}" opacity="{opacity}" d="{path}" id="svg_{title}"/>
 </g>
"#,
        fill = escape(style.fill.as_str()),
        stroke = escape(style.stroke.as_str()),
        stroke_width = style.stroke_width,
        opacity = style.opacity,
        path = layer.path,
    )
}

/// Render the document with its layers in insertion order
pub fn document_to_svg(document: &SvgDocument, style: &LayerStyle) -> String {
    let layers: String = document
        .layers
        .iter()
        .map(|layer| layer_to_svg(layer, style))
        .collect();

    format!(
        r#"
<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
 <!-- Created with bezier2svg -->

{layers}
</svg>
"#,
        width = document.width,
        height = document.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let svg = document_to_svg(&SvgDocument::new(200.0, 50.5), &LayerStyle::default());
        assert!(svg.contains(r#"<svg width="200" height="50.5" xmlns="http://www.w3.org/2000/svg">"#));
        assert!(!svg.contains("<g>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_layer_markup() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        doc.new_layer("BezierCurve", "M 0 0 \n");
        let svg = document_to_svg(&doc, &LayerStyle::default());

        assert!(svg.contains("<title>BezierCurve</title>"));
        assert!(svg.contains(
            "<path fill=\"#fff\" stroke=\"#000\" stroke-width=\"1.5\" opacity=\"0.5\" \
             d=\"M 0 0 \n\" id=\"svg_BezierCurve\"/>"
        ));
    }

    #[test]
    fn test_layers_keep_order() {
        let mut doc = SvgDocument::new(1.0, 1.0);
        doc.new_layer("First", "M 0 0 \n");
        doc.new_layer("Second", "M 1 1 \n");
        let svg = document_to_svg(&doc, &LayerStyle::default());

        let first = svg.find("<title>First</title>").unwrap();
        let second = svg.find("<title>Second</title>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_title_is_escaped() {
        let mut doc = SvgDocument::new(1.0, 1.0);
        doc.new_layer("A<B>&\"C\"", "M 0 0 \n");
        let svg = document_to_svg(&doc, &LayerStyle::default());

        assert!(svg.contains("<title>A&lt;B&gt;&amp;&quot;C&quot;</title>"));
        assert!(svg.contains(r#"id="svg_A&lt;B&gt;&amp;&quot;C&quot;""#));
    }

    #[test]
    fn test_custom_style() {
        let style = LayerStyle {
            fill: "none".to_string(),
            stroke: "#f00".to_string(),
            stroke_width: 0.25,
            opacity: 1.0,
        };
        let mut doc = SvgDocument::new(1.0, 1.0);
        doc.new_layer("Curve", "M 0 0 \n");
        let svg = document_to_svg(&doc, &style);
        assert!(svg.contains(r##"fill="none" stroke="#f00" stroke-width="0.25" opacity="1""##));
    }
}
