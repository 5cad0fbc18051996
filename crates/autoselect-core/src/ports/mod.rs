//! Ports - 抽象化レイヤー
//!
//! エンジンの外側（時刻, クライアント API, 操作の送信, 状態の購読）との
//! インターフェースを trait として定義します。

pub mod actuator;
pub mod clock;
pub mod event_sink;
pub mod transport;

pub use self::actuator::{ActuatorError, ChampSelectActuator};
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::{EventSink, NoopEventSink, RecordingEventSink, TracingEventSink};
pub use self::transport::{LcuTransport, TransportError};
