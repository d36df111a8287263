pub const SECTION: &str = "min-h-screen w-full bg-gray-50 dark:bg-gray-900 p-8";
pub const MAIN_CONTAINER: &str = "w-full max-w-3xl mx-auto mt-8";
pub const HEADER: &str = "text-3xl font-bold text-center text-gray-900 dark:text-white mb-3";
pub const BIO: &str = "text-center text-gray-600 dark:text-gray-300 mb-8";
pub const CONNECT_BUTTON: &str = "ml-auto block px-4 py-2 rounded-md font-medium text-white bg-purple-700 hover:bg-purple-800 shadow transition-colors duration-200";
pub const FORM: &str = "flex flex-col text-center";
pub const FORM_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_INPUT: &str = "my-4 block w-full rounded-md border border-purple-700 bg-transparent py-2 pl-2 text-gray-900 dark:text-white focus:outline-black";
pub const SUBMIT_BUTTON: &str = "mx-auto block px-4 py-2 rounded-md font-medium text-white bg-purple-700 hover:bg-purple-800 shadow disabled:opacity-60 transition-colors duration-200";
pub const TOTAL_ROW: &str = "my-4 text-gray-900 dark:text-white";
pub const TOTAL_LABEL: &str = "font-semibold mr-2";
pub const WAVE_GRID: &str = "mt-10 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4";
pub const WAVE_CARD: &str = "p-3 rounded-md shadow-lg w-full h-40 flex flex-col justify-between";
pub const WAVE_MESSAGE: &str = "overflow-y-auto text-gray-900";
pub const WAVE_FOOTER: &str = "flex items-center justify-between";
pub const WAVE_DATE: &str = "text-sm font-semibold text-gray-800";
pub const WAVE_SENDER: &str = "text-sm text-gray-700 cursor-help";
