// src/rules/android.rs
//! Rule information for the Android scan engine
//!
//! Includes:
//! - Color contrast (ratio and colors taken from finding props)
//! - Touch target size (converted from pixels to dp)
//! - Active view name, image view name, edit text value (fixed guidance)

use crate::config::compile_time::rules::{
    BASELINE_DPI, CONTRAST_RATIO_DECIMALS, MIN_TEXT_CONTRAST_RATIO, MIN_TOUCH_TARGET_DP,
};
use crate::logging::codes;
use crate::rules::errors::RuleError;
use crate::rules::information::{include_all_results, RuleInformation};
use crate::rules::provider::{RuleInformationRegistry, RuleRegistryBuilder};
use crate::types::{RuleResultsData, UnifiedResolution};

pub mod rule_ids {
    pub const COLOR_CONTRAST: &str = "ColorContrast";
    pub const TOUCH_SIZE_WCAG: &str = "TouchSizeWcag";
    pub const ACTIVE_VIEW_NAME: &str = "ActiveViewName";
    pub const IMAGE_VIEW_NAME: &str = "ImageViewName";
    pub const EDIT_TEXT_VALUE: &str = "EditTextValue";
}

pub mod prop_keys {
    pub const COLOR_CONTRAST_RATIO: &str = "Color Contrast Ratio";
    pub const FOREGROUND_COLOR: &str = "Foreground Color";
    pub const BACKGROUND_COLOR: &str = "Background Color";
    pub const SCREEN_DPI: &str = "Screen Dots Per Inch";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
}

const WCAG_UNDERSTANDING: &str = "https://www.w3.org/WAI/WCAG21/Understanding";

/// Registry with every rule the Android engine reports
pub fn create_android_rule_provider() -> Result<RuleInformationRegistry, RuleError> {
    Ok(RuleRegistryBuilder::new()
        .add_rule(color_contrast_rule())?
        .add_rule(touch_size_rule())?
        .add_rule(active_view_name_rule())?
        .add_rule(image_view_name_rule())?
        .add_rule(edit_text_value_rule())?
        .build())
}

fn color_contrast_rule() -> RuleInformation {
    RuleInformation::new(
        rule_ids::COLOR_CONTRAST,
        "Text elements must have sufficient contrast against the background.",
        Box::new(color_contrast_resolution),
        Box::new(include_color_contrast_result),
    )
    .with_guidance(
        "WCAG 1.4.3",
        &format!("{}/contrast-minimum.html", WCAG_UNDERSTANDING),
    )
}

fn touch_size_rule() -> RuleInformation {
    RuleInformation::new(
        rule_ids::TOUCH_SIZE_WCAG,
        "Touch inputs must have a sufficient target size.",
        Box::new(touch_size_resolution),
        Box::new(include_all_results),
    )
    .with_guidance("WCAG 2.5.5", &format!("{}/target-size.html", WCAG_UNDERSTANDING))
}

fn active_view_name_rule() -> RuleInformation {
    RuleInformation::with_fixed_resolution(
        rule_ids::ACTIVE_VIEW_NAME,
        "Active views must have a name that is available to assistive technologies.",
        UnifiedResolution {
            how_to_fix_sentence: "The view is active but has no name available to assistive \
                technologies. Provide a visible label using android:text or a non-visible label \
                using android:contentDescription."
                .to_string(),
            format_as_code: vec![
                "android:text".to_string(),
                "android:contentDescription".to_string(),
            ],
        },
    )
    .with_guidance(
        "WCAG 4.1.2",
        &format!("{}/name-role-value.html", WCAG_UNDERSTANDING),
    )
}

fn image_view_name_rule() -> RuleInformation {
    RuleInformation::with_fixed_resolution(
        rule_ids::IMAGE_VIEW_NAME,
        "Meaningful images must have alternate text.",
        UnifiedResolution {
            how_to_fix_sentence: "The image has no alternate text and is not identified as \
                decorative. If the image conveys meaningful content, provide alternate text using \
                android:contentDescription. If the image is decorative, give it an empty \
                contentDescription, or set its isImportantForAccessibility attribute to false."
                .to_string(),
            format_as_code: vec![
                "android:contentDescription".to_string(),
                "contentDescription".to_string(),
                "isImportantForAccessibility".to_string(),
                "false".to_string(),
            ],
        },
    )
    .with_guidance(
        "WCAG 1.1.1",
        &format!("{}/non-text-content.html", WCAG_UNDERSTANDING),
    )
}

fn edit_text_value_rule() -> RuleInformation {
    RuleInformation::with_fixed_resolution(
        rule_ids::EDIT_TEXT_VALUE,
        "EditText elements must expose their entered text value to assistive technologies.",
        UnifiedResolution {
            how_to_fix_sentence: "The element's contentDescription overrides the text value \
                required by assistive technologies. Remove the element's contentDescription \
                attribute."
                .to_string(),
            format_as_code: vec!["contentDescription".to_string()],
        },
    )
    .with_guidance(
        "WCAG 4.1.2",
        &format!("{}/name-role-value.html", WCAG_UNDERSTANDING),
    )
}

/// Failing contrast findings surface only when the reported ratio is really
/// below the normal-text threshold
fn include_color_contrast_result(result: &RuleResultsData) -> bool {
    if result.status != "FAIL" {
        return true;
    }

    match result.number_prop(prop_keys::COLOR_CONTRAST_RATIO) {
        Some(ratio) => ratio < MIN_TEXT_CONTRAST_RATIO,
        None => {
            crate::log_debug!(
                "Dropping contrast failure without a ratio",
                "code" => codes::rules::MALFORMED_RULE_PROPS,
                "view" => result.axe_view_id
            );
            false
        }
    }
}

fn color_contrast_resolution(result: &RuleResultsData) -> UnifiedResolution {
    let ratio = result
        .number_prop(prop_keys::COLOR_CONTRAST_RATIO)
        .map(floor_to_decimals)
        .map(|r| r.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let foreground = color_value(result, prop_keys::FOREGROUND_COLOR);
    let background = color_value(result, prop_keys::BACKGROUND_COLOR);

    UnifiedResolution {
        how_to_fix_sentence: format!(
            "The text element has insufficient contrast of {}. Foreground color: {}, \
             background color: {}). Fix the foreground and background colors so the contrast \
             ratio is at least {}:1.",
            ratio, foreground, background, MIN_TEXT_CONTRAST_RATIO
        ),
        format_as_code: vec![foreground, background],
    }
}

fn touch_size_resolution(result: &RuleResultsData) -> UnifiedResolution {
    let dpi = result
        .number_prop(prop_keys::SCREEN_DPI)
        .filter(|dpi| *dpi > 0.0)
        .unwrap_or(BASELINE_DPI);
    let ratio = dpi / BASELINE_DPI;

    let to_dp = |key: &str| -> String {
        result
            .number_prop(key)
            .map(|px| ((px / ratio).round() as i64).to_string())
            .unwrap_or_else(|| "unknown".to_string())
    };

    let min_dp = format!("{}dp", MIN_TOUCH_TARGET_DP);
    UnifiedResolution {
        how_to_fix_sentence: format!(
            "The element has an insufficient target size (width: {}dp, height: {}dp). \
             Set the element's minWidth and minHeight attributes to at least {}.",
            to_dp(prop_keys::WIDTH),
            to_dp(prop_keys::HEIGHT),
            min_dp
        ),
        format_as_code: vec!["minWidth".to_string(), "minHeight".to_string(), min_dp],
    }
}

/// Engine colors are ARGB hex ("ff112233"); users see "#112233"
fn color_value(result: &RuleResultsData, key: &str) -> String {
    match result.string_prop(key) {
        Some(argb) if argb.len() >= 8 && argb.is_char_boundary(2) && argb.is_char_boundary(8) => {
            format!("#{}", &argb[2..8])
        }
        Some(other) => other.to_string(),
        None => "unknown".to_string(),
    }
}

fn floor_to_decimals(value: f64) -> f64 {
    let factor = 10f64.powi(CONTRAST_RATIO_DECIMALS);
    (value * factor).floor() / factor
}
