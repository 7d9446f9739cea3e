use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::leave::candidates;
use crate::core::onleave::{LeaveChanges, OnLeaveLogic};
use crate::core::state::AppState;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREY, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Leave {
        add,
        remove,
        clear,
        list,
        candidates: show_candidates,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;

        let changes = LeaveChanges {
            add: add.clone(),
            remove: remove.clone(),
            clear: *clear,
        };

        let state = if changes.is_empty() {
            AppState::load(&pool)?
        } else {
            let state = OnLeaveLogic::update(&mut pool, &changes)?;
            success(format!("Leave list saved ({} agent(s)).", state.leave().len()));
            state
        };

        if *list {
            print_leave_list(&state);
        }

        if *show_candidates {
            print_candidates(&state);
        }
    }

    Ok(())
}

fn print_leave_list(state: &AppState) {
    header("On leave");
    if state.leave().is_empty() {
        info("Nobody is on leave.");
        return;
    }
    for agent in state.leave().sorted() {
        println!("  • {agent}");
    }
}

fn print_candidates(state: &AppState) {
    header("Agents");
    let all = candidates(state.dataset());
    if all.is_empty() {
        info("No agents in the stored dataset.");
        return;
    }
    for agent in all {
        if state.leave().contains(&agent) {
            println!("  [x] {YELLOW}{agent}{RESET} {GREY}(on leave){RESET}");
        } else {
            println!("  [ ] {agent}");
        }
    }
}
