use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle() -> AppResult<()> {
    let path = Config::init()?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
