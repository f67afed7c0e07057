// src/views/screenshot.rs
//! Screenshot with highlight boxes drawn over the highlighted results

use crate::results::ResultGenerationError;
use crate::types::{InstanceResultStatus, ScreenshotData, UnifiedScanResultStoreData};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightBoxViewModel {
    pub result_uid: String,
    /// "!" on failures
    pub label: Option<String>,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotViewModel {
    pub screenshot_data: Option<ScreenshotData>,
    pub image_width: Option<u32>,
    pub image_height: Option<u32>,
    pub device_name: Option<String>,
    pub highlight_boxes: Vec<HighlightBoxViewModel>,
}

/// Width and height from the PNG header
pub fn png_dimensions(screenshot: &ScreenshotData) -> Result<(u32, u32), ResultGenerationError> {
    let bytes = STANDARD
        .decode(screenshot.base64_png_data.trim())
        .map_err(|e| ResultGenerationError::screenshot_decode_failed(&e.to_string()))?;

    if bytes.len() < 24 || bytes[..8] != PNG_SIGNATURE || bytes[12..16] != *b"IHDR" {
        return Err(ResultGenerationError::screenshot_decode_failed(
            "data is not a PNG image",
        ));
    }

    let read_u32 = |offset: usize| {
        u32::from_be_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
    };
    Ok((read_u32(16), read_u32(20)))
}

/// Boxes are scaled from device pixels to image pixels; without a known
/// device width the two are taken to match
pub fn get_screenshot_view_model(
    store_data: &UnifiedScanResultStoreData,
    highlighted_result_uids: &[String],
) -> Result<ScreenshotViewModel, ResultGenerationError> {
    let device_name = store_data
        .platform_info
        .as_ref()
        .and_then(|platform| platform.device_name.clone());

    let Some(screenshot) = store_data.screenshot_data.as_ref() else {
        return Ok(ScreenshotViewModel {
            device_name,
            ..ScreenshotViewModel::default()
        });
    };

    let (image_width, image_height) = png_dimensions(screenshot)?;
    let device_width = store_data
        .platform_info
        .as_ref()
        .and_then(|platform| platform.viewport_info.width)
        .filter(|width| *width > 0);
    let scale = device_width
        .map(|width| f64::from(image_width) / width as f64)
        .unwrap_or(1.0);

    let highlight_boxes = store_data
        .results
        .iter()
        .flatten()
        .filter(|result| highlighted_result_uids.contains(&result.uid))
        .filter_map(|result| {
            let rect = result.descriptors.as_ref()?.bounding_rectangle?;
            Some(HighlightBoxViewModel {
                result_uid: result.uid.clone(),
                label: (result.status == InstanceResultStatus::Fail).then(|| "!".to_string()),
                left: rect.left as f64 * scale,
                top: rect.top as f64 * scale,
                width: rect.width() as f64 * scale,
                height: rect.height() as f64 * scale,
            })
        })
        .collect();

    Ok(ScreenshotViewModel {
        screenshot_data: Some(screenshot.clone()),
        image_width: Some(image_width),
        image_height: Some(image_height),
        device_name,
        highlight_boxes,
    })
}
