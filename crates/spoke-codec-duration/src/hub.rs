//! # DurationHub：时长族的枢纽数据
//!
//! ## 核心意图（Why）
//! - 所有时长格式都先折算成“总秒数”，再按周、天、时、分、秒、毫秒、微秒、纳秒逐级拆分，
//!   各格式的解码函数只需挑选自己关心的分量；
//!
//! ## 行为契约（What）
//! - 输入各分量取绝对值后累加，因此枢纽数据总是非负；
//! - 拆分时每级先取整再扣除，分量受上限约束：天 < 7、时 < 24、分 < 60、秒 < 60、
//!   毫秒/微秒/纳秒 < 1000；超出上限的分量记为 0，但对应时长仍会被扣除；
//! - `total_*` 返回整段时长在该单位下的浮点数值。

const WEEK_SECONDS: f64 = 604_800.0;
const DAY_SECONDS: f64 = 86_400.0;
const HOUR_SECONDS: f64 = 3_600.0;
const MINUTE_SECONDS: f64 = 60.0;
const SUB_SECOND_STEP: f64 = 1_000.0;

/// 构造 [`DurationHub`] 的分量信封，未给出的分量为 0。
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DurationParams {
    /// 周
    pub w: f64,
    /// 天
    pub d: f64,
    /// 时
    pub h: f64,
    /// 分
    pub m: f64,
    /// 秒
    pub s: f64,
    /// 毫秒
    pub ms: f64,
    /// 微秒
    pub us: f64,
    /// 纳秒
    pub ns: f64,
}

impl DurationParams {
    /// 折算为总秒数。
    pub fn seconds(&self) -> f64 {
        (self.w * WEEK_SECONDS).abs()
            + (self.d * DAY_SECONDS).abs()
            + (self.h * HOUR_SECONDS).abs()
            + (self.m * MINUTE_SECONDS).abs()
            + self.s.abs()
            + (self.ms / 1e3).abs()
            + (self.us / 1e6).abs()
            + (self.ns / 1e9).abs()
    }
}

/// 拆分后的时长。
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DurationHub {
    weeks: u64,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
    millis: u32,
    micros: u32,
    nanos: u32,
    total: f64,
}

impl DurationHub {
    /// 由分量构造。
    pub fn from_params(params: &DurationParams) -> Self {
        Self::from_seconds(params.seconds())
    }

    /// 由总秒数构造；非正数与非有限值得到零时长。
    pub fn from_seconds(seconds: f64) -> Self {
        let mut hub = Self::default();
        if !seconds.is_finite() || seconds <= 0.0 {
            return hub;
        }
        hub.total = seconds;

        let mut remaining = seconds;
        let weeks = (remaining / WEEK_SECONDS).floor();
        if weeks >= 1.0 {
            hub.weeks = weeks as u64;
            remaining -= weeks * WEEK_SECONDS;
        }
        hub.days = take(&mut remaining, DAY_SECONDS, 7);
        hub.hours = take(&mut remaining, HOUR_SECONDS, 24);
        hub.minutes = take(&mut remaining, MINUTE_SECONDS, 60);
        hub.seconds = take(&mut remaining, 1.0, 60);

        let mut fraction = remaining - remaining.floor();
        hub.millis = take_sub_second(&mut fraction);
        hub.micros = take_sub_second(&mut fraction);
        hub.nanos = take_sub_second(&mut fraction);
        hub
    }

    /// 周分量。
    pub fn weeks(&self) -> u64 {
        self.weeks
    }

    /// 天分量（< 7）。
    pub fn days(&self) -> u32 {
        self.days
    }

    /// 小时分量（< 24）。
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// 分钟分量（< 60）。
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// 秒分量（< 60）。
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// 毫秒分量（< 1000）。
    pub fn millis(&self) -> u32 {
        self.millis
    }

    /// 微秒分量（< 1000）。
    pub fn micros(&self) -> u32 {
        self.micros
    }

    /// 纳秒分量（< 1000）。
    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    /// 整段时长折合的周数。
    pub fn total_weeks(&self) -> f64 {
        self.total / WEEK_SECONDS
    }

    /// 整段时长折合的天数。
    pub fn total_days(&self) -> f64 {
        self.total / DAY_SECONDS
    }

    /// 整段时长折合的小时数。
    pub fn total_hours(&self) -> f64 {
        self.total / HOUR_SECONDS
    }

    /// 整段时长折合的分钟数。
    pub fn total_minutes(&self) -> f64 {
        self.total / MINUTE_SECONDS
    }

    /// 整段时长的秒数。
    pub fn total_seconds(&self) -> f64 {
        self.total
    }

    /// 整段时长折合的毫秒数。
    pub fn total_millis(&self) -> f64 {
        self.total * 1e3
    }

    /// 整段时长折合的微秒数。
    pub fn total_micros(&self) -> f64 {
        self.total * 1e6
    }

    /// 整段时长折合的纳秒数。
    pub fn total_nanos(&self) -> f64 {
        self.total * 1e9
    }

    /// 转换为标准库时长；超出其表示范围时返回 `None`。
    pub fn to_std(&self) -> Option<std::time::Duration> {
        std::time::Duration::try_from_secs_f64(self.total).ok()
    }
}

impl From<DurationParams> for DurationHub {
    fn from(params: DurationParams) -> Self {
        Self::from_params(&params)
    }
}

impl From<std::time::Duration> for DurationHub {
    fn from(duration: std::time::Duration) -> Self {
        Self::from_seconds(duration.as_secs_f64())
    }
}

/// 从 `remaining` 中扣除整数个 `unit`，返回受 `ceiling` 约束的分量。
fn take(remaining: &mut f64, unit: f64, ceiling: u32) -> u32 {
    let count = (*remaining / unit).floor();
    if count < 1.0 {
        return 0;
    }
    *remaining -= count * unit;
    if count < f64::from(ceiling) { count as u32 } else { 0 }
}

fn take_sub_second(fraction: &mut f64) -> u32 {
    let scaled = *fraction * SUB_SECOND_STEP;
    let count = scaled.floor();
    *fraction = scaled - count;
    if (1.0..SUB_SECOND_STEP).contains(&count) { count as u32 } else { 0 }
}
