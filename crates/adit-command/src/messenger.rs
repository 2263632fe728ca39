//! The runtime configuration interface.

use adit_core::{Command, DispatchError, RandomEngine, SimState, ValidationError};
use adit_detector::GeometryBuilder;

use crate::dispatch::{CommandSpec, CommandTable, CONFIG_STATES};
use crate::seeds::parse_seed_stream;

/// Command path for the room energy cut.
pub const CMD_ROOM_ENERGY_CUT: &str = "/detector/setRoomEnergyCut";
/// Command path for the detector energy cut.
pub const CMD_ENERGY_CUT: &str = "/detector/setEnergyCut";
/// Command path for the detector time cut.
pub const CMD_TIME_CUT: &str = "/detector/setTimeCut";
/// Command path for the room time cut.
pub const CMD_ROOM_TIME_CUT: &str = "/detector/setRoomTimeCut";
/// Command path for the detector step limit.
pub const CMD_MAX_STEP: &str = "/detector/setMaxStep";
/// Command path for the seed stream.
pub const CMD_SET_SEEDS: &str = "/seed/setSeeds";

/// Operator command surface over the geometry builder and random engine.
///
/// Owns the builder and the injected engine, and applies validated
/// commands to them. Every rejection — unknown path, wrong state, bad
/// argument — leaves both collaborators exactly as they were; the
/// returned error's `Display` text is the operator diagnostic.
#[derive(Debug)]
pub struct RuntimeConfig<E> {
    builder: GeometryBuilder,
    engine: E,
    table: CommandTable,
}

impl<E: RandomEngine> RuntimeConfig<E> {
    /// Wrap a builder and engine, registering the full command set.
    pub fn new(builder: GeometryBuilder, engine: E) -> Self {
        let mut table = CommandTable::new();
        for (path, guidance, parameter) in [
            (
                CMD_ROOM_ENERGY_CUT,
                &["Minimum kinetic energy tracked in the room volumes, in MeV."][..],
                "RoomEnergyCut",
            ),
            (
                CMD_ENERGY_CUT,
                &["Minimum kinetic energy tracked in the detector, in MeV."][..],
                "EnergyCut",
            ),
            (
                CMD_TIME_CUT,
                &["Maximum track time inside the detector, in ns."][..],
                "TimeCut",
            ),
            (
                CMD_ROOM_TIME_CUT,
                &["Maximum track time inside the room volumes, in ns."][..],
                "RoomTimeCut",
            ),
            (
                CMD_MAX_STEP,
                &["Maximum step length inside the detector, in mm."][..],
                "MaxStep",
            ),
        ] {
            table.register(CommandSpec {
                path,
                guidance,
                parameter,
                states: CONFIG_STATES,
                broadcast: true,
            });
        }
        table.register(CommandSpec {
            path: CMD_SET_SEEDS,
            guidance: &[
                "Initialize the random number generator with an integer seed stream.",
                "Number of integers should be more than 1.",
                "Actual number of integers to be used depends on the individual random number engine.",
                "This command sets the seeds for the coordinating context only.",
            ],
            parameter: "IntArray",
            states: CONFIG_STATES,
            // Worker streams are derived elsewhere; this one stays on the
            // coordinating context.
            broadcast: false,
        });

        Self {
            builder,
            engine,
            table,
        }
    }

    /// Gate, parse, and apply one command.
    ///
    /// Cut values are stored for the next `construct()`; a seed stream is
    /// forwarded to the engine exactly once. Any failure is a no-op.
    pub fn dispatch(&mut self, state: SimState, cmd: &Command) -> Result<(), DispatchError> {
        self.table.check(state, &cmd.path)?;
        match cmd.path.as_str() {
            CMD_ROOM_ENERGY_CUT => {
                let v = parse_number(&cmd.arg)?;
                self.builder.set_room_energy_cut(v)?;
            }
            CMD_ENERGY_CUT => {
                let v = parse_number(&cmd.arg)?;
                self.builder.set_energy_cut(v)?;
            }
            CMD_TIME_CUT => {
                let v = parse_number(&cmd.arg)?;
                self.builder.set_time_cut(v)?;
            }
            CMD_ROOM_TIME_CUT => {
                let v = parse_number(&cmd.arg)?;
                self.builder.set_room_time_cut(v)?;
            }
            CMD_MAX_STEP => {
                let v = parse_number(&cmd.arg)?;
                self.builder.set_max_step(v)?;
            }
            CMD_SET_SEEDS => {
                let stream = parse_seed_stream(&cmd.arg)?;
                self.engine.set_seeds(&stream);
            }
            // check() already refused anything unregistered.
            _ => unreachable!("registered command without a handler: {}", cmd.path),
        }
        Ok(())
    }

    /// The geometry builder, for construction and inspection.
    pub fn builder(&self) -> &GeometryBuilder {
        &self.builder
    }

    /// The injected random engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the engine, for the transport side.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The registered command metadata.
    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Tear down into the owned builder and engine.
    pub fn into_parts(self) -> (GeometryBuilder, E) {
        (self.builder, self.engine)
    }
}

/// Parse a single numeric argument.
fn parse_number(arg: &str) -> Result<f64, ValidationError> {
    let token = arg.trim();
    token.parse().map_err(|_| ValidationError::Malformed {
        token: token.to_owned(),
    })
}
