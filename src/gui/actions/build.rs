// src/gui/actions/build.rs
use crate::{config::consts::DEFAULT_PARENT_CODE, gui::app::App, variants};

pub fn build(app: &mut App) {
    if let Err(e) = app.state.sync_variant_fields() {
        app.status(e);
        return;
    }

    let Some((ds, _)) = &app.input else {
        app.status("Load an input file first");
        return;
    };

    let opts = &mut app.state.options.variants;
    if variants::needs_parent_code(ds, opts) {
        logw!("Build: template row has no product code, using {}", DEFAULT_PARENT_CODE);
        opts.parent_code = Some(s!(DEFAULT_PARENT_CODE));
        app.state.gui.parent_code_text = s!(DEFAULT_PARENT_CODE);
    }

    let result = variants::build_variants(ds, opts);

    match result {
        Ok(build) => {
            let mut msg = format!(
                "Built MAIN + {} variants (parent {}, parameter: {}, {} common)",
                build.variant_rows().len(),
                build.parent_code,
                build.param.as_deref().unwrap_or("none"),
                build.common.len(),
            );
            for n in &build.notices {
                msg.push_str(&format!(" · {}", n));
            }
            logf!("Build: {}", msg);
            app.build = Some(build);
            app.status(msg);
        }
        Err(e) => {
            loge!("Build: Error: {}", e);
            app.build = None;
            app.status(format!("Build error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::state::AppState, data::DataSet, file::TableSource};

    fn app_with(code: &str) -> App {
        let mut app = App::new(AppState::default());
        let ds = DataSet::new(
            row!["[PRODUCT_CODE]", "[VARIANT_CODE]", "[TITLE]"],
            vec![row![code, "", "Jacket"], row!["B2", "", "Jacket"]],
        );
        let src = TableSource { path: "in.csv".into(), encoding: s!("utf-8"), delimiter: Some(';') };
        app.set_input(ds, src);
        app
    }

    #[test]
    fn blank_template_code_falls_back_to_default() {
        let mut app = app_with("  ");
        build(&mut app);
        let b = app.build.as_ref().unwrap();
        assert_eq!(b.parent_code, DEFAULT_PARENT_CODE);
        assert!(b.dataset.rows.iter().all(|r| r[0] == DEFAULT_PARENT_CODE));
        assert_eq!(b.variant_rows()[1][1], "B2");
        assert_eq!(app.state.gui.parent_code_text, DEFAULT_PARENT_CODE);
    }

    #[test]
    fn template_code_is_kept_when_present() {
        let mut app = app_with("A1");
        build(&mut app);
        assert_eq!(app.build.as_ref().unwrap().parent_code, "A1");
        assert_eq!(app.state.gui.parent_code_text, "");
    }
}
