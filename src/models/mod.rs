pub mod notification;

pub use notification::{
    DispatchResponse, LocalizedText, NotificationRequest, ProviderNotification, BROADCAST_SEGMENT,
};
