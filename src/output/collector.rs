//! View import collector: one deterministic pre-order, left-to-right pass over an output
//! view tree that reserves a nickname for every referenced type. Reservation order drives
//! nickname disambiguation, so the order is part of the contract.

use super::view::{OutputView, PrintView};
use crate::error::ViewError;
use crate::policy::ImportPolicy;
use crate::symbol_table::SymbolTable;
use tracing::{debug, trace};

/// Collect imports for an ordered list of output view roots.
///
/// The whole tree is validated before the table is touched, so a contract violation
/// leaves the table unchanged.
pub fn collect_imports(
    views: &[OutputView],
    table: &mut SymbolTable,
    policy: &dyn ImportPolicy,
) -> Result<(), ViewError> {
    views.iter().try_for_each(OutputView::validate)?;

    let mut collector = ImportCollector { table, policy };
    for view in views {
        collector.visit(view)?;
    }

    debug!(
        roots = views.len(),
        nicknames = collector.table.len(),
        imports = collector.table.imports().len(),
        "Collected output view imports"
    );
    Ok(())
}

/// Collect imports for a single output view root.
pub fn collect_view_imports(
    view: &OutputView,
    table: &mut SymbolTable,
    policy: &dyn ImportPolicy,
) -> Result<(), ViewError> {
    collect_imports(std::slice::from_ref(view), table, policy)
}

struct ImportCollector<'a> {
    table: &'a mut SymbolTable,
    policy: &'a dyn ImportPolicy,
}

impl ImportCollector<'_> {
    fn visit(&mut self, view: &OutputView) -> Result<(), ViewError> {
        trace!(kind = view.kind_name(), "Visiting output view");
        match view {
            OutputView::Define(define) => {
                self.table.reserve(&define.reference);
            }
            OutputView::Loop(lp) => {
                self.table.reserve(lp.element_type()?);
                for child in &lp.body {
                    self.visit(child)?;
                }
            }
            OutputView::Print(print) => self.visit_print(print),
            OutputView::Comment(_) => {}
        }
        Ok(())
    }

    fn visit_print(&mut self, print: &PrintView) {
        let mut auxiliary: Option<String> = None;
        for variable in print.variables() {
            self.table.reserve(&variable.type_ref);
            if auxiliary.is_none() {
                auxiliary = self.policy.auxiliary_import(variable);
            }
        }
        if let Some(statement) = auxiliary {
            self.table.add_import(statement);
        }
    }
}
