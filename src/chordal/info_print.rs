use super::*;
use crate::graph::Graph;
use crate::io::ConfigurablePrintTarget;
use crate::timers::Timers;
use std::io::Write;

impl ConfigurablePrintTarget for CliqueDecomposer {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

const RULE: &str = "-------------------------------------------------------------";

impl CliqueDecomposer {
    pub(crate) fn print_banner(&mut self) -> std::io::Result<()> {
        let out = &mut self.stream;

        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "        chordmerge v{}  -  clique decomposition",
            crate::VERSION
        )?;
        writeln!(out, "{RULE}")?;
        Ok(())
    }

    #[allow(non_snake_case)]
    pub(crate) fn print_configuration(
        &mut self,
        G: &Graph,
        extension: &ChordalExtension,
        cliques: &[Clique],
    ) -> std::io::Result<()> {
        let out = &mut self.stream;
        let set = &self.settings;

        writeln!(out, "\ngraph:")?;
        writeln!(out, "  nodes           = {}", G.nnodes())?;
        writeln!(out, "  edges           = {}", G.nedges())?;
        writeln!(out, "  fill-in edges   = {}", extension.fill_in.len())?;
        writeln!(out, "  maximal cliques = {}", cliques.len())?;
        writeln!(
            out,
            "  largest clique  = {}",
            cliques.iter().map(|c| c.len()).max().unwrap_or(0)
        )?;

        writeln!(out, "\nsettings:")?;
        writeln!(
            out,
            "  ordering = {}, amd dense scale = {:.2}",
            set.ordering, set.amd_dense_scale
        )?;
        writeln!(
            out,
            "  merge method = {}, check chordality = {}",
            set.merge_method,
            _bool_on_off(set.check_chordality)
        )?;
        writeln!(out,)?;
        out.flush()?;
        Ok(())
    }

    pub(crate) fn print_merge_table(&mut self, result: &DecompositionResult) -> std::io::Result<()> {
        let out = &mut self.stream;

        //print a subheader for the iterations info
        write!(out, "iter  ")?;
        write!(out, "cliques  ")?;
        write!(out, "sdp cost  ")?;
        write!(out, "linking  ")?;
        write!(out, "largest  ")?;
        write!(out, "merge cost")?;
        writeln!(out,)?;
        writeln!(out, "{RULE}")?;

        let ninitial = result.history.ninitial();

        for (k, entry) in result.cost_trace.iter().enumerate() {
            write!(out, "{:>4}  ", k)?;
            write!(out, "{:>7}  ", ninitial - k)?;
            write!(out, "{:>8}  ", entry.sdp_cost)?;
            write!(out, "{:>7}  ", entry.linking_constraints)?;
            write!(out, "{:>7}  ", entry.largest_clique)?;
            if k < result.linkage.len() {
                write!(out, "{:>+10}", result.linkage[k].cost)?;
            } else {
                write!(out, "{:>10}", "------")?;
            }
            writeln!(out,)?;
        }
        Ok(())
    }

    pub(crate) fn print_footer(&mut self, timers: &Timers) -> std::io::Result<()> {
        let out = &mut self.stream;

        writeln!(out, "{RULE}")?;
        for (key, elapsed) in timers.entries() {
            writeln!(out, "{key} time = {elapsed:?}")?;
        }
        writeln!(out, "total time = {:?}", timers.total_time())?;
        out.flush()?;
        Ok(())
    }
}

fn _bool_on_off(v: bool) -> &'static str {
    match v {
        true => "on",
        false => "off",
    }
}
