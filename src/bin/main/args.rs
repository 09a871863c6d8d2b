use clap::{Parser, ValueEnum};
use roundy_core::{clock::LocalTime, direction::Direction, palette::PaletteVariant};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Random,
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

impl DirectionArg {
    /// `None` means pick one at random.
    pub fn fixed(self) -> Option<Direction> {
        match self {
            Self::Random => None,
            Self::TopToBottom => Some(Direction::TopToBottom),
            Self::BottomToTop => Some(Direction::BottomToTop),
            Self::LeftToRight => Some(Direction::LeftToRight),
            Self::RightToLeft => Some(Direction::RightToLeft),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PaletteArg {
    Light,
    Dark,
}

impl From<PaletteArg> for PaletteVariant {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Light => Self::Light,
            PaletteArg::Dark => Self::Dark,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Runs the Roundy watchface sweep on a virtual 180x180 panel")]
pub struct Args {
    /// Sweep direction for both surfaces.
    #[arg(long, value_name = "DIRECTION", default_value = "random")]
    pub direction: DirectionArg,

    /// Show the time in 24-hour style.
    #[arg(long = "24h")]
    pub use_24h: bool,

    /// Display variant.
    #[arg(long, value_name = "VARIANT", default_value = "dark")]
    pub palette: PaletteArg,

    /// Pin the displayed time instead of reading the system clock.
    #[arg(long, value_name = "HH:MM", value_parser = parse_time)]
    pub time: Option<LocalTime>,

    /// Minutes added to UTC to get local time.
    #[arg(long, value_name = "MINUTES", default_value_t = 0, allow_hyphen_values = true)]
    pub utc_offset: i32,

    /// Print every redrawn frame as text.
    #[arg(long)]
    pub dump: bool,

    /// Sample every n-th pixel when dumping.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub dump_step: usize,

    /// Run timers back to back instead of in real time.
    #[arg(long)]
    pub no_sleep: bool,
}

fn parse_time(value: &str) -> Result<LocalTime, String> {
    let (hour, minute) = value
        .split_once(':')
        .ok_or_else(|| format!("expected HH:MM, got `{value}`"))?;
    let hour: u8 = hour
        .parse()
        .map_err(|err| format!("bad hour `{hour}`: {err}"))?;
    let minute: u8 = minute
        .parse()
        .map_err(|err| format!("bad minute `{minute}`: {err}"))?;

    if hour > 23 || minute > 59 {
        return Err(format!("`{value}` is not a time of day"));
    }
    Ok(LocalTime::new(hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clock_times() {
        assert_eq!(parse_time("07:45"), Ok(LocalTime::new(7, 45)));
        assert_eq!(parse_time("23:59"), Ok(LocalTime::new(23, 59)));
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12").is_err());
        assert!(parse_time("ab:cd").is_err());
    }

    #[test]
    fn flags_map_to_core_types() {
        let args = Args::parse_from(["roundy", "--direction", "left-to-right", "--palette", "light", "--24h"]);

        assert_eq!(args.direction.fixed(), Some(Direction::LeftToRight));
        assert_eq!(PaletteVariant::from(args.palette), PaletteVariant::Light);
        assert!(args.use_24h);
        assert!(args.time.is_none());
    }
}
