//! Pure rendering of validated parameters into file artifacts.
//!
//! Rendering is deterministic: directive order is fixed by the templates and
//! no run-dependent data (timestamps, hostnames) is interpolated, so equal
//! parameter sets always yield byte-identical artifacts.

use std::path::PathBuf;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, Value};

use crate::domain::artifact::{INI_PATH, RenderSet, RenderedArtifact, SQL_PATH};
use crate::domain::{AppError, ConfigParameters};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

const INI_TEMPLATE: &str = "snmptt.ini.j2";
const SQL_TEMPLATE: &str = "snmptt.sql.j2";

/// The daemon's INI grammar encodes booleans as the literal characters
/// `1` and `0`, never `true`/`false`.
fn flag(value: bool) -> String {
    if value { "1".to_string() } else { "0".to_string() }
}

fn environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.add_filter("flag", flag);

    for template in [INI_TEMPLATE, SQL_TEMPLATE] {
        let source = TEMPLATES_DIR
            .get_file(template)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| {
                minijinja::Error::new(
                    minijinja::ErrorKind::TemplateNotFound,
                    format!("embedded template '{template}' missing"),
                )
            })?;
        env.add_template(template, source)?;
    }

    Ok(env)
}

/// Render the full artifact set for a validated parameter set.
///
/// The SQL artifact is rendered only when `enable_mysql` is set; otherwise it
/// carries `present = false` so the apply layer keeps the file absent.
pub fn render(params: &ConfigParameters) -> Result<RenderSet, AppError> {
    let env = environment()?;
    let context = Value::from_serialize(params);

    let ini = RenderedArtifact {
        path: PathBuf::from(INI_PATH),
        content: env.get_template(INI_TEMPLATE)?.render(&context)?,
        mode: 0o644,
        present: true,
    };

    // Mode 0640: the schema file embeds the MySQL password.
    let sql = if params.enable_mysql {
        RenderedArtifact {
            path: PathBuf::from(SQL_PATH),
            content: env.get_template(SQL_TEMPLATE)?.render(&context)?,
            mode: 0o640,
            present: true,
        }
    } else {
        RenderedArtifact {
            path: PathBuf::from(SQL_PATH),
            content: String::new(),
            mode: 0o640,
            present: false,
        }
    };

    Ok(RenderSet { ini, sql })
}
