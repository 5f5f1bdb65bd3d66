//! Build-phase cloning between targets.

use xcforge_core::target::{BuildPhase, PhaseKind, Target};

/// Copy every build-phase entry from `source` into `dest`, preserving
/// relative order within each phase kind.
///
/// Sources, frameworks, and resources entries are appended to the
/// destination's same-kind phase, which is created when missing. Each
/// shell-script phase is recreated one-for-one with its display name and
/// script body copied verbatim. The destination ends up structurally
/// isomorphic to the source, never sharing entries by reference.
pub fn clone_build_phases(source: &Target, dest: &mut Target) {
    for phase in &source.build_phases {
        match phase {
            BuildPhase::Sources { files } => {
                dest.phase_files_mut(PhaseKind::Sources)
                    .extend(files.iter().cloned());
            }
            BuildPhase::Frameworks { files } => {
                dest.phase_files_mut(PhaseKind::Frameworks)
                    .extend(files.iter().cloned());
            }
            BuildPhase::Resources { files } => {
                dest.phase_files_mut(PhaseKind::Resources)
                    .extend(files.iter().cloned());
            }
            BuildPhase::ShellScript { name, script } => {
                dest.new_shell_script_phase(name, script);
            }
        }
    }
}
