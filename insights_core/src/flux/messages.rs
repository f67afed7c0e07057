// src/flux/messages.rs
//! The closed set of messages the interpreter understands
//!
//! Each variant carries its payload type; the dotted message type string only
//! exists on the wire (`{"messageType": "...", "payload": ...}`). The payload
//! may be left out when every field of the variant's payload is optional.

use crate::flux::payloads::*;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

macro_rules! define_messages {
    ($( $(#[$doc:meta])* $variant:ident($payload:ty) => $message_type:literal, )+) => {
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "messageType", content = "payload")]
        pub enum Message {
            $(
                $(#[$doc])*
                #[serde(rename = $message_type)]
                $variant($payload),
            )+
        }

        /// Payload free discriminant of [`Message`], used as routing key
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum MessageKind {
            $( $variant, )+
        }

        impl MessageKind {
            pub const ALL: &'static [MessageKind] = &[$( MessageKind::$variant ),+];

            pub fn message_type(&self) -> &'static str {
                match self {
                    $( Self::$variant => $message_type, )+
                }
            }

            pub fn from_message_type(message_type: &str) -> Option<Self> {
                match message_type {
                    $( $message_type => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl<'de> Deserialize<'de> for Message {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let envelope = MessageEnvelope::deserialize(deserializer)?;
                let kind = MessageKind::from_message_type(&envelope.message_type).ok_or_else(|| {
                    D::Error::custom(format!("unknown message type '{}'", envelope.message_type))
                })?;

                let message = match kind {
                    $( MessageKind::$variant => payload_or_empty(envelope.payload).map(Self::$variant), )+
                };
                message.map_err(D::Error::custom)
            }
        }

        impl Message {
            pub fn kind(&self) -> MessageKind {
                match self {
                    $( Self::$variant(_) => MessageKind::$variant, )+
                }
            }
        }
    };
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageEnvelope {
    message_type: String,
    #[serde(default)]
    payload: Option<Value>,
}

/// A missing or null payload reads as `{}`
fn payload_or_empty<T: DeserializeOwned>(payload: Option<Value>) -> Result<T, serde_json::Error> {
    match payload {
        Some(value) if !value.is_null() => serde_json::from_value(value),
        _ => serde_json::from_value(Value::Object(serde_json::Map::new())),
    }
}

define_messages! {
    /// Bring the target page's tab to the front
    SwitchTab(BaseActionPayload) => "Tab.Switch",
    OpenDetailsView(OnDetailsViewOpenPayload) => "Visualizations.DetailsView.Open",
    SelectDetailsView(OnDetailsViewOpenPayload) => "Visualizations.DetailsView.Select",
    SelectDetailsViewPivot(OnDetailsViewPivotSelected) => "Visualizations.DetailsView.PivotSelect",
    UpdateIssuesSelectedTargets(Vec<String>) => "Visualizations.Issues.UpdateSelectedTargets",
    UpdateFocusedInstance(Vec<String>) => "Visualizations.Issues.UpdateFocusedInstance",
    ConfigureShortcuts(BaseActionPayload) => "Shortcuts.ConfigureShortcuts",
    SetLaunchPanel(SetLaunchPanelState) => "LaunchPanel.Set",
    SetFeatureFlag(SetFeatureFlagPayload) => "FeatureFlags.SetFeatureFlag",
    ClosePreviewFeaturesPanel(BaseActionPayload) => "PreviewFeatures.ClosePanel",
    CloseScopingPanel(BaseActionPayload) => "Scoping.ClosePanel",
    OpenSettingsPanel(BaseActionPayload) => "SettingsPanel.OpenPanel",
    CloseSettingsPanel(BaseActionPayload) => "SettingsPanel.ClosePanel",
    ChangeInstanceStatus(ChangeInstanceStatusPayload) => "Assessment.ChangeStatus",
    SelectTestRequirement(SelectTestRequirementPayload) => "Assessment.SelectTestRequirement",
    StartOverTest(StartOverPayload) => "Assessment.StartOver",
    CardSelectionToggled(CardSelectionPayload) => "CardSelection.CardSelectionToggled",
    RuleExpansionToggled(RuleExpandCollapsePayload) => "CardSelection.RuleExpansionToggled",
    ToggleVisualHelper(BaseActionPayload) => "CardSelection.ToggleVisualHelper",
    CollapseAllRules(BaseActionPayload) => "CardSelection.CollapseAllRules",
    ExpandAllRules(BaseActionPayload) => "CardSelection.ExpandAllRules",
    SetTelemetryConfig(SetTelemetryStatePayload) => "UserConfig.SetTelemetryConfig",
    SetHighContrastConfig(SetHighContrastModePayload) => "UserConfig.SetHighContrastConfig",
    SetIssueFilingService(SetIssueFilingServicePayload) => "UserConfig.SetIssueFilingService",
    SetIssueFilingServiceProperty(SetIssueFilingServicePropertyPayload) => "UserConfig.SetIssueFilingServiceProperty",
    /// Side channel: reaches the telemetry handler, never a store
    SendTelemetry(SendTelemetryPayload) => "Telemetry.Send",
}

impl Message {
    pub fn message_type(&self) -> &'static str {
        self.kind().message_type()
    }

    pub fn is_telemetry_only(&self) -> bool {
        matches!(self, Self::SendTelemetry(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{TelemetryData, TelemetryEventSource, TriggeredBy};
    use serde_json::json;

    #[test]
    fn test_tab_switch_wire_format() {
        let telemetry = TelemetryData::new(TriggeredBy::MouseClick, TelemetryEventSource::DetailsView);
        let message = Message::SwitchTab(BaseActionPayload::with_telemetry(telemetry));

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "messageType": "Tab.Switch",
                "payload": {"telemetry": {"triggeredBy": "mouseclick", "source": "detailsView"}}
            })
        );

        let back: Message = serde_json::from_value(value).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn test_kind_and_message_type_agree() {
        for kind in MessageKind::ALL {
            assert_eq!(MessageKind::from_message_type(kind.message_type()), Some(*kind));
        }
        assert_eq!(MessageKind::from_message_type("Nope.Nothing"), None);

        let message = Message::UpdateIssuesSelectedTargets(vec!["#a".to_string()]);
        assert_eq!(message.kind(), MessageKind::UpdateIssuesSelectedTargets);
        assert_eq!(message.message_type(), "Visualizations.Issues.UpdateSelectedTargets");
    }

    #[test]
    fn test_card_selection_payload_camel_case() {
        let message = Message::CardSelectionToggled(CardSelectionPayload {
            rule_id: "ColorContrast".to_string(),
            result_instance_uid: "uid-1".to_string(),
            telemetry: None,
        });

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "messageType": "CardSelection.CardSelectionToggled",
                "payload": {"ruleId": "ColorContrast", "resultInstanceUid": "uid-1"}
            })
        );
        assert!(!message.is_telemetry_only());
    }

    #[test]
    fn test_payload_may_be_omitted() {
        let bare: Message = serde_json::from_value(json!({"messageType": "Tab.Switch"})).unwrap();
        assert_eq!(bare, Message::SwitchTab(BaseActionPayload::default()));

        let null: Message =
            serde_json::from_value(json!({"messageType": "CardSelection.ExpandAllRules", "payload": null}))
                .unwrap();
        assert_eq!(null, Message::ExpandAllRules(BaseActionPayload::default()));

        let round_trip: Message = serde_json::from_value(serde_json::to_value(&bare).unwrap()).unwrap();
        assert_eq!(round_trip, bare);

        // Required payload fields still have to be there
        let parsed: Result<Message, _> =
            serde_json::from_value(json!({"messageType": "CardSelection.CardSelectionToggled"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_unknown_message_type_rejected() {
        let parsed: Result<Message, _> =
            serde_json::from_value(json!({"messageType": "Bogus", "payload": {}}));
        assert!(parsed.is_err());
    }
}
