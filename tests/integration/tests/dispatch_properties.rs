//! End-to-end dispatch behavior across the built-in providers.

use courier_core::{RejectReason, ValidationWarning};
use courier_integration_tests::{dispatcher, sample_messages};

#[tokio::test]
async fn test_whatsapp_delivers_only_digit_recipients() {
    let dispatcher = dispatcher();
    for message in sample_messages() {
        for recipient in ["1", "5551234", "55119876543210"] {
            let result = dispatcher
                .send("whatsapp", recipient, &message)
                .await
                .unwrap();
            assert!(
                result.is_delivered(),
                "whatsapp should deliver to {recipient:?}"
            );
        }
        for recipient in ["+5551234", "555-1234", "@user", "five", ""] {
            let result = dispatcher
                .send("whatsapp", recipient, &message)
                .await
                .unwrap();
            assert!(
                matches!(
                    result.reject_reason(),
                    Some(RejectReason::InvalidRecipientFormat { .. })
                ),
                "whatsapp should reject {recipient:?}"
            );
        }
    }
}

#[tokio::test]
async fn test_username_channels_always_deliver() {
    let dispatcher = dispatcher();
    let messages = sample_messages();
    let message = &messages[0];
    for channel in ["facebook", "instagram"] {
        let prefixed = dispatcher.send(channel, "@maria", message).await.unwrap();
        assert!(prefixed.is_delivered());
        assert!(prefixed.warning().is_none());

        let bare = dispatcher.send(channel, "maria", message).await.unwrap();
        assert!(bare.is_delivered(), "{channel} must deliver bare usernames");
        assert_eq!(
            bare.warning(),
            Some(ValidationWarning::MissingUsernamePrefix)
        );
    }
}

#[tokio::test]
async fn test_telegram_delivers_all_recipient_shapes() {
    let dispatcher = dispatcher();
    let messages = sample_messages();
    let message = &messages[0];
    for recipient in ["123456", "@alice", "freeform"] {
        let result = dispatcher.send("telegram", recipient, message).await.unwrap();
        assert!(
            result.is_delivered(),
            "telegram must deliver to {recipient:?}"
        );
    }
}

#[tokio::test]
async fn test_unknown_channel_is_rejected() {
    let dispatcher = dispatcher();
    let messages = sample_messages();
    let message = &messages[0];
    let result = dispatcher.send("snapchat", "@x", message).await.unwrap();
    assert!(matches!(
        result.reject_reason(),
        Some(RejectReason::UnknownChannel { name }) if name == "snapchat"
    ));
}

#[tokio::test]
async fn test_channel_lookup_ignores_case() {
    let dispatcher = dispatcher();
    let messages = sample_messages();
    let message = &messages[0];
    for name in ["whatsapp", "WhatsApp", "WHATSAPP"] {
        let result = dispatcher.send(name, "5551234", message).await.unwrap();
        assert!(result.is_delivered(), "{name} should resolve");
    }
}

#[tokio::test]
async fn test_receipts_name_the_channel() {
    let dispatcher = dispatcher();
    let messages = sample_messages();
    let message = &messages[0];
    let result = dispatcher.send("Telegram", "@alice", message).await.unwrap();
    let receipt = result.receipt().expect("delivered");
    assert_eq!(receipt.channel, "Telegram");
    assert_eq!(receipt.recipient, "@alice");
}

#[tokio::test]
async fn test_media_messages_flow_through_every_channel() {
    let dispatcher = dispatcher();
    for message in sample_messages() {
        let result = dispatcher.send("telegram", "@alice", &message).await.unwrap();
        let receipt = result.receipt().expect("delivered");
        assert_eq!(receipt.kind, message.content_kind());
    }
}
