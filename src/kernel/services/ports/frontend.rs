/// User-facing collaborators the controller talks to synchronously.
pub trait Frontend {
    /// Asks the user to affirm a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;

    fn report_error(&mut self, message: &str);

    /// Hands generated content to the user as a downloadable file.
    fn download(&mut self, file_name: &str, content: &str);
}
