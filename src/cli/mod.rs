use clap::builder::PossibleValue;
use clap::{Parser, ValueEnum};

use crate::config::ProfileKind;

/// Bridge a SpaceBall/SpaceNavigator event stream onto a virtual HID device.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Controller type to emulate
    #[arg(short = 't', long = "type", value_enum, value_name = "TYPE")]
    pub profile: ProfileKind,
}

impl ValueEnum for ProfileKind {
    fn value_variants<'a>() -> &'a [Self] {
        &ProfileKind::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let help = match self {
            ProfileKind::Joystick => "6 axis joystick with all buttons",
            ProfileKind::Relative => "6 axis joystick with raw relative output",
            ProfileKind::Tablet => "Wacom-like drawing tablet with pressure and stroke direction",
            ProfileKind::Mouse => "Standard 3 button mouse",
        };
        Some(PossibleValue::new(self.name()).help(help))
    }
}
