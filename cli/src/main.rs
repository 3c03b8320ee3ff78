mod commands;
mod terminal;

use commands::{CommandLine, Commands, bits, raid, subnet, units};
use fisi_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_explain: commands.no_explain,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg)?;

    match commands.command {
        Commands::Subnet {
            address,
            prefix,
            summary,
        } => {
            print::header("subnet calculator", &cfg);
            subnet::subnet(&address, prefix, summary, &cfg)
        }
        Commands::Raid { level, disks, size } => {
            print::header("raid calculator", &cfg);
            raid::raid(level, disks, size, &cfg)
        }
        Commands::Bits {
            dec,
            hex,
            bin,
            toggle,
        } => {
            print::header("bit matrix", &cfg);
            let input = bits::RegisterInput::from_flags(dec, hex, bin);
            bits::bits(input, &toggle, &cfg)
        }
        Commands::Units { value, from, to } => {
            print::header("unit converter", &cfg);
            units::units(&value, from, to, &cfg)
        }
    }
}
