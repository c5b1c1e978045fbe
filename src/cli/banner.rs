use crate::cli::output;
use crate::utils::build_info;

pub struct Banner;

impl Banner {
    pub fn render() {
        output::section(Self::text());
    }

    pub fn text() -> String {
        format!("Budget Planner {}", build_info::current().short_label())
    }

    /// Full build metadata, printed by `--build-info`.
    pub fn render_details() {
        let meta = build_info::current();
        output::section(format!("Budget Planner {}", meta.version));
        for line in Self::detail_lines(&meta) {
            output::info(line);
        }
    }

    fn detail_lines(meta: &build_info::BuildMetadata) -> Vec<String> {
        vec![
            format!("  Build hash : {}", meta.git_hash),
            format!("  Built at   : {}", meta.timestamp),
            format!("  Profile    : {}", meta.profile),
        ]
    }
}
