//! Deck assembly: write the `.pptx` ZIP container.
//!
//! A PowerPoint file is a ZIP of OOXML parts. This module emits the
//! smallest part set PowerPoint, Keynote, and LibreOffice all accept:
//! content types, package relationships, `presentation.xml`, one blank
//! master/layout/theme chain, document properties, and one slide + PNG
//! pair per page.
//!
//! The parts are fixed-shape, so they are written as `format!` templates.
//! Only numbers and uppercase hex colors are interpolated — never caller
//! text — which is what makes the no-escaping approach sound. If a
//! user-controlled string ever needs to land in a part, it must be
//! escaped first.
//!
//! All coordinates are EMU (914 400 per inch). Offsets may be negative:
//! the placement policy does not clamp, and `a:off` accepts any integer,
//! so an oversized page simply hangs off the slide edge.

use crate::config::BackgroundColor;
use crate::error::Pdf2DeckError;
use crate::geometry::{inches_to_emu, SlideSize};
use std::io::{Cursor, Write};
use tracing::debug;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// One page image with its resolved frame, ready to become a slide.
#[derive(Debug, Clone)]
pub struct SlideImage {
    /// Encoded PNG bytes of the shrunk page.
    pub png: Vec<u8>,
    /// Frame top-left x, inches. May be negative.
    pub offset_x_in: f64,
    /// Frame top-left y, inches. May be negative.
    pub offset_y_in: f64,
    /// Frame width, inches.
    pub width_in: f64,
    /// Frame height, inches.
    pub height_in: f64,
}

/// Serialise the deck: one slide per image, uniform size and background.
///
/// Returns the complete `.pptx` bytes. Slides appear in input order.
pub fn assemble_deck(
    slides: &[SlideImage],
    slide_size: SlideSize,
    background: BackgroundColor,
) -> Result<Vec<u8>, Pdf2DeckError> {
    let (slide_w_in, slide_h_in) = slide_size.dimensions();
    let (cx, cy) = (inches_to_emu(slide_w_in), inches_to_emu(slide_h_in));
    let bg_hex = background.to_hex();
    let n = slides.len();

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    // XML parts deflate to a fraction of their size; PNGs are already
    // compressed, so store them as-is instead of deflating twice.
    let xml = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let png = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    fn put(
        zip: &mut ZipWriter<Cursor<Vec<u8>>>,
        name: &str,
        opts: SimpleFileOptions,
        bytes: &[u8],
    ) -> Result<(), Pdf2DeckError> {
        let fail = |e: String| Pdf2DeckError::DeckWriteFailed {
            detail: format!("{name}: {e}"),
        };
        zip.start_file(name, opts).map_err(|e| fail(e.to_string()))?;
        zip.write_all(bytes).map_err(|e| fail(e.to_string()))?;
        Ok(())
    }

    put(&mut zip, "[Content_Types].xml", xml, content_types(n).as_bytes())?;
    put(&mut zip, "_rels/.rels", xml, PACKAGE_RELS.as_bytes())?;
    put(&mut zip, "docProps/core.xml", xml, CORE_PROPS.as_bytes())?;
    put(&mut zip, "docProps/app.xml", xml, app_props(n).as_bytes())?;
    put(&mut zip, "ppt/presentation.xml", xml, presentation(n, cx, cy).as_bytes())?;
    put(&mut zip, "ppt/_rels/presentation.xml.rels", xml, presentation_rels(n).as_bytes())?;
    put(&mut zip, "ppt/slideMasters/slideMaster1.xml", xml, SLIDE_MASTER.as_bytes())?;
    put(&mut zip, "ppt/slideMasters/_rels/slideMaster1.xml.rels", xml, SLIDE_MASTER_RELS.as_bytes())?;
    put(&mut zip, "ppt/slideLayouts/slideLayout1.xml", xml, SLIDE_LAYOUT.as_bytes())?;
    put(&mut zip, "ppt/slideLayouts/_rels/slideLayout1.xml.rels", xml, SLIDE_LAYOUT_RELS.as_bytes())?;
    put(&mut zip, "ppt/theme/theme1.xml", xml, THEME.as_bytes())?;

    for (i, slide) in slides.iter().enumerate() {
        let num = i + 1;
        let frame = Frame {
            x: inches_to_emu(slide.offset_x_in),
            y: inches_to_emu(slide.offset_y_in),
            cx: inches_to_emu(slide.width_in),
            cy: inches_to_emu(slide.height_in),
        };
        put(
            &mut zip,
            &format!("ppt/slides/slide{num}.xml"),
            xml,
            slide_xml(num, &bg_hex, frame).as_bytes(),
        )?;
        put(
            &mut zip,
            &format!("ppt/slides/_rels/slide{num}.xml.rels"),
            xml,
            slide_rels(num).as_bytes(),
        )?;
        put(&mut zip, &format!("ppt/media/image{num}.png"), png, &slide.png)?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| Pdf2DeckError::DeckWriteFailed {
            detail: format!("finalising archive: {e}"),
        })?;

    let bytes = cursor.into_inner();
    debug!("Assembled deck: {} slides, {} bytes", n, bytes.len());
    Ok(bytes)
}

/// A picture frame in EMU.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
}

// ── Static parts ─────────────────────────────────────────────────────────

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/></Relationships>"#;

const CORE_PROPS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title>Merged deck</dc:title><dc:creator>pdf2deck</dc:creator></cp:coreProperties>"#;

const SLIDE_MASTER_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/></Relationships>"#;

const SLIDE_LAYOUT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/></Relationships>"#;

// ── Generated parts ──────────────────────────────────────────────────────

fn content_types(slide_count: usize) -> String {
    let mut s = String::with_capacity(1024 + slide_count * 128);
    s.push_str(XML_DECL);
    s.push_str("\n<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">");
    s.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    s.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    s.push_str(r#"<Default Extension="png" ContentType="image/png"/>"#);
    s.push_str(r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#);
    s.push_str(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#);
    s.push_str(r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#);
    s.push_str(r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#);
    s.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    s.push_str(r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#);
    for i in 1..=slide_count {
        s.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        ));
    }
    s.push_str("</Types>");
    s
}

fn app_props(slide_count: usize) -> String {
    format!(
        "{XML_DECL}\n<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\"><Application>pdf2deck</Application><Slides>{slide_count}</Slides></Properties>"
    )
}

fn presentation(slide_count: usize, cx: i64, cy: i64) -> String {
    let mut s = format!(
        "{XML_DECL}\n<p:presentation xmlns:a=\"{NS_A}\" xmlns:r=\"{NS_R}\" xmlns:p=\"{NS_P}\">"
    );
    s.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    s.push_str("<p:sldIdLst>");
    for i in 1..=slide_count {
        // Slide ids start at 256; rId1 is the master, so slides are offset by one.
        s.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            255 + i,
            1 + i
        ));
    }
    s.push_str("</p:sldIdLst>");
    s.push_str(&format!(r#"<p:sldSz cx="{cx}" cy="{cy}"/>"#));
    s.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    s.push_str("</p:presentation>");
    s
}

fn presentation_rels(slide_count: usize) -> String {
    let mut s = format!("{XML_DECL}\n<Relationships xmlns=\"{REL_NS}\">");
    s.push_str(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#);
    for i in 1..=slide_count {
        s.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{i}.xml"/>"#,
            1 + i
        ));
    }
    s.push_str("</Relationships>");
    s
}

fn slide_rels(num: usize) -> String {
    format!(
        "{XML_DECL}\n<Relationships xmlns=\"{REL_NS}\"><Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout\" Target=\"../slideLayouts/slideLayout1.xml\"/><Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/image\" Target=\"../media/image{num}.png\"/></Relationships>"
    )
}

/// One slide: solid background fill plus a single stretched picture.
fn slide_xml(num: usize, bg_hex: &str, f: Frame) -> String {
    format!(
        r#"{XML_DECL}
<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val="{bg_hex}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/><p:pic><p:nvPicPr><p:cNvPr id="2" name="Page {num}"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="rId2"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#,
        x = f.x,
        y = f.y,
        cx = f.cx,
        cy = f.cy,
    )
}

// The master, layout, and theme never vary: every slide draws its own
// background and a single picture, so the chain exists only because the
// format requires one.

const SLIDE_MASTER: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld>"#,
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree>"#,
    r#"</p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst></p:sldMaster>"#
);

const SLIDE_LAYOUT: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank"><p:cSld name="Blank">"#,
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree>"#,
    r#"</p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#
);

/// The smallest theme Office accepts: one color scheme, one font scheme,
/// and the three-entry format scheme lists the schema insists on.
const THEME: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="pdf2deck"><a:themeElements><a:clrScheme name="pdf2deck"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="44546A"/></a:dk2><a:lt2><a:srgbClr val="E7E6E6"/></a:lt2><a:accent1><a:srgbClr val="4472C4"/></a:accent1><a:accent2><a:srgbClr val="ED7D31"/></a:accent2><a:accent3><a:srgbClr val="A5A5A5"/></a:accent3><a:accent4><a:srgbClr val="FFC000"/></a:accent4><a:accent5><a:srgbClr val="5B9BD5"/></a:accent5><a:accent6><a:srgbClr val="70AD47"/></a:accent6><a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink></a:clrScheme><a:fontScheme name="pdf2deck"><a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="pdf2deck"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    // A 1×1 px PNG, the smallest valid image to embed.
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
        0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78,
        0x9C, 0x62, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
        0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    fn sample_slide(x: f64, y: f64) -> SlideImage {
        SlideImage {
            png: TINY_PNG.to_vec(),
            offset_x_in: x,
            offset_y_in: y,
            width_in: 4.0,
            height_in: 3.0,
        }
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).expect("valid zip");
        let mut part = archive.by_name(name).expect(name);
        let mut s = String::new();
        part.read_to_string(&mut s).expect("utf-8 part");
        s
    }

    #[test]
    fn deck_contains_the_full_part_inventory() {
        let bytes =
            assemble_deck(&[sample_slide(0.5, 0.5)], SlideSize::FourByThree, BackgroundColor::White)
                .expect("assemble");

        let archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        let names: Vec<&str> = archive.file_names().collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/media/image1.png",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(names.contains(&expected), "missing part {expected}");
        }
    }

    #[test]
    fn presentation_carries_the_preset_size_in_emu() {
        let bytes =
            assemble_deck(&[sample_slide(0.5, 0.5)], SlideSize::SixteenByNine, BackgroundColor::White)
                .expect("assemble");
        let pres = read_part(&bytes, "ppt/presentation.xml");
        // 13.33 in × 914400, rounded
        assert!(pres.contains(r#"<p:sldSz cx="12188952" cy="6858000"/>"#), "{pres}");
    }

    #[test]
    fn slide_background_uses_the_selected_hex() {
        let bytes = assemble_deck(
            &[sample_slide(0.5, 0.5)],
            SlideSize::FourByThree,
            BackgroundColor::LightBlue,
        )
        .expect("assemble");
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains(r#"<a:srgbClr val="ADD8E6"/>"#), "{slide}");
    }

    #[test]
    fn picture_frame_lands_at_the_computed_offset() {
        let bytes = assemble_deck(
            &[sample_slide(5.5, 4.0)],
            SlideSize::FourByThree,
            BackgroundColor::White,
        )
        .expect("assemble");
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains(r#"<a:off x="5029200" y="3657600"/>"#), "{slide}");
        assert!(slide.contains(r#"<a:ext cx="3657600" cy="2743200"/>"#), "{slide}");
    }

    #[test]
    fn negative_offsets_pass_through_unclamped() {
        let bytes = assemble_deck(
            &[sample_slide(-1.5, 0.5)],
            SlideSize::FourByThree,
            BackgroundColor::White,
        )
        .expect("assemble");
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains(r#"<a:off x="-1371600" y="457200"/>"#), "{slide}");
    }

    #[test]
    fn every_slide_gets_its_own_image_and_rels() {
        let slides = vec![sample_slide(0.5, 0.5), sample_slide(3.0, 2.25), sample_slide(5.5, 4.0)];
        let bytes = assemble_deck(&slides, SlideSize::Widescreen, BackgroundColor::Yellow)
            .expect("assemble");

        let pres = read_part(&bytes, "ppt/presentation.xml");
        assert_eq!(pres.matches("<p:sldId ").count(), 3);

        let rels3 = read_part(&bytes, "ppt/slides/_rels/slide3.xml.rels");
        assert!(rels3.contains("../media/image3.png"));

        let types = read_part(&bytes, "[Content_Types].xml");
        assert!(types.contains("/ppt/slides/slide3.xml"));
    }

    #[test]
    fn media_parts_are_stored_byte_identical() {
        let bytes = assemble_deck(
            &[sample_slide(0.5, 0.5)],
            SlideSize::FourByThree,
            BackgroundColor::White,
        )
        .expect("assemble");

        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        let mut part = archive.by_name("ppt/media/image1.png").expect("media part");
        let mut stored = Vec::new();
        part.read_to_end(&mut stored).expect("read media");
        assert_eq!(stored, TINY_PNG);
    }
}
