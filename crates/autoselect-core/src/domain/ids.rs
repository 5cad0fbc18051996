//! Domain identifiers (strongly-typed IDs).
//!
//! クライアントが払い出す整数 ID をそのまま保持します。
//! Phantom type パターンで `ChampionId` / `CellId` / `ActionId` を
//! 同じ実装から作りつつ、コンパイル時には混同できないようにしています。
//!
//! ## ワイヤ表現
//! JSON 上はただの整数（`{"championId": 103}`）なので、
//! Serialize / Deserialize は手書きで i64 として扱います。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// IdMarker は各 ID 型のマーカー trait
///
/// Display で使うプレフィックス（"champion-", "cell-", "action-"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// ジェネリック ID 型
///
/// `0` は「未設定」を意味します（クライアントが空欄を 0 で送ってくるため）。
#[repr(transparent)]
pub struct Id<T: IdMarker> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// 未設定を表す値
    pub const UNSET: Self = Self::new(0);

    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn get(self) -> i64 {
        self.value
    }

    /// 0 以外なら設定済み
    pub const fn is_set(self) -> bool {
        self.value != 0
    }
}

// derive だと T にも境界が付いてしまうので手書きする
impl<T: IdMarker> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: IdMarker> Copy for Id<T> {}

impl<T: IdMarker> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: IdMarker> Eq for Id<T> {}

impl<T: IdMarker> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: IdMarker> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: IdMarker> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: IdMarker> Default for Id<T> {
    fn default() -> Self {
        Self::UNSET
    }
}

impl<T: IdMarker> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.value)
    }
}

impl<T: IdMarker> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, T: IdMarker> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // null は未設定として扱う
        let value = Option::<i64>::deserialize(deserializer)?;
        Ok(Self::new(value.unwrap_or(0)))
    }
}

// ========================================
// マーカー型の定義
// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Champion {}

impl IdMarker for Champion {
    fn prefix() -> &'static str {
        "champion-"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {}

impl IdMarker for Cell {
    fn prefix() -> &'static str {
        "cell-"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionMarker {}

impl IdMarker for ActionMarker {
    fn prefix() -> &'static str {
        "action-"
    }
}

pub type ChampionId = Id<Champion>;
pub type CellId = Id<Cell>;
pub type ActionId = Id<ActionMarker>;

impl Id<Champion> {
    /// ban リスト上の「空 ban を出す」指定
    pub const EMPTY_BAN: Self = Self::new(-1);

    pub const fn is_empty_ban(self) -> bool {
        self.value == -1
    }
}

impl Id<ActionMarker> {
    /// 空 ban（何も禁止しない）アクションに付く予約 ID
    pub const NO_OP: Self = Self::new(-1);
}

/// プレイヤーのグローバル ID
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Puuid(String);

impl Puuid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for Puuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Puuid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
