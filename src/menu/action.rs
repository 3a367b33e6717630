use crate::list::ListKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Forwarded to the list widget.
    List(ListKey),
    Select,
    AppendToFilter(char),
    DeleteFromFilter,
    RemoveLastWord,
    ToggleHelp,
    Exit,
    Nop,
}
