use log::{debug, info};

use crate::error::{ArgumentError, PipelineError};
use crate::model::CodeModel;
use crate::plugin::{Options, Plugin};

/// Dispatches command-line options to registered plugins and runs the active ones.
pub struct Pipeline {
    options: Options,
    plugins: Vec<Box<dyn Plugin>>,
    active: Vec<usize>,
}

impl Pipeline {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            plugins: Vec::new(),
            active: Vec::new(),
        }
    }

    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        debug!("registered plugin -{}", plugin.option_name());
        for decl in plugin.classpath_types() {
            self.options.classpath.register(decl);
        }
        self.plugins.push(plugin);
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Option names of the enabled plugins, in activation order.
    pub fn active_plugins(&self) -> Vec<&str> {
        self.active
            .iter()
            .map(|&idx| self.plugins[idx].option_name())
            .collect()
    }

    /// Offer `args[i]` to every plugin. Returns the number of tokens consumed.
    pub fn parse_argument(&mut self, args: &[String], i: usize) -> Result<usize, ArgumentError> {
        let Some(token) = args.get(i) else {
            return Ok(0);
        };
        for idx in 0..self.plugins.len() {
            let consumed = self.plugins[idx].parse_argument(&self.options, args, i)?;
            if consumed > 0 {
                self.activate(idx);
                return Ok(consumed);
            }
            let flag = format!("-{}", self.plugins[idx].option_name());
            if token.trim() == flag {
                self.activate(idx);
                return Ok(1);
            }
        }
        Ok(0)
    }

    /// Parse every token; any token no plugin claims is an error.
    pub fn parse_arguments(&mut self, args: &[String]) -> Result<(), ArgumentError> {
        let mut i = 0;
        while i < args.len() {
            let consumed = self.parse_argument(args, i)?;
            if consumed == 0 {
                return Err(ArgumentError::Unrecognized(args[i].clone()));
            }
            i += consumed;
        }
        Ok(())
    }

    fn activate(&mut self, idx: usize) {
        if !self.active.contains(&idx) {
            debug!("activated plugin -{}", self.plugins[idx].option_name());
            self.active.push(idx);
        }
    }

    /// Usage text of every registered plugin.
    pub fn usage(&self) -> String {
        self.plugins.iter().map(|p| p.usage()).collect()
    }

    /// Run each active plugin once. Consumes the pipeline so a build cannot run twice.
    pub fn run(mut self, model: &mut CodeModel) -> Result<(), PipelineError> {
        for &idx in &self.active {
            let plugin = &mut self.plugins[idx];
            info!(
                "running plugin -{} over {} classes",
                plugin.option_name(),
                model.classes.len()
            );
            if !plugin.run(model, &self.options) {
                return Err(PipelineError::PluginFailed(plugin.option_name().to_string()));
            }
        }
        Ok(())
    }
}
