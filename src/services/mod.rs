pub mod providers;

pub use providers::{
    MockProvider, NotificationProvider, OneSignalProvider, ProviderError, ProviderReceipt,
};
