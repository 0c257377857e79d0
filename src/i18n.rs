#[derive(Clone, Copy, PartialEq)]
pub enum Language {
    En,
    Zh,
}

pub struct Dict {
    pub app_title: &'static str,
    pub device_label: &'static str,

    pub home_nav: &'static str,
    pub logs_nav: &'static str,
    pub status_nav: &'static str,
    pub settings_nav: &'static str,

    pub loading: &'static str,
    pub close: &'static str,
    pub error_prefix: &'static str,

    // Home
    pub home_title: &'static str,
    pub home_subtitle: &'static str,
    pub custom_message_label: &'static str,
    pub custom_message_placeholder: &'static str,
    pub send_custom_btn: &'static str,
    pub send_test_btn: &'static str,

    // Logs
    pub logs_title: &'static str,
    pub logs_subtitle: &'static str,
    pub logs_empty: &'static str,
    pub logs_fetch_error: &'static str,
    pub src_ip: &'static str,
    pub dest_ip: &'static str,

    // Status
    pub status_title: &'static str,
    pub status_fetch_error: &'static str,
    pub uptime: &'static str,
    pub seconds: &'static str,
    pub free_heap: &'static str,
    pub bytes: &'static str,
    pub chip_revision: &'static str,
    pub wifi_rssi: &'static str,
    pub current_time: &'static str,
    pub time_zone: &'static str,
    pub wifi_ip: &'static str,
    pub eth_ip: &'static str,
    pub reboot_btn: &'static str,
    pub rebooting_title: &'static str,
    pub rebooting_hint: &'static str,

    // Settings
    pub settings_title: &'static str,
    pub settings_fetch_error: &'static str,
    pub device_number: &'static str,
    pub site_id: &'static str,
    pub site_id_hint: &'static str,
    pub enable_system_logs: &'static str,
    pub enable_http_logs: &'static str,
    pub enable_lora_logs: &'static str,
    pub save_btn: &'static str,
    pub invalid_device_number: &'static str,
    pub invalid_site_id: &'static str,

    pub lora_received: &'static str,
}

pub static EN_DICT: Dict = Dict {
    app_title: "LoRa Gateway",
    device_label: "Device",

    home_nav: "Home",
    logs_nav: "Logs",
    status_nav: "Status",
    settings_nav: "Settings",

    loading: "Loading...",
    close: "Close",
    error_prefix: "Error",

    home_title: "Send LoRa Messages",
    home_subtitle: "Broadcast from this gateway",
    custom_message_label: "Enter a custom LoRa message to send:",
    custom_message_placeholder: "Enter your message here",
    send_custom_btn: "Send Custom LoRa Message",
    send_test_btn: "Send Test LoRa Message",

    logs_title: "Connection and System Logs",
    logs_subtitle: "Most recent entries kept by the device",
    logs_empty: "No logs yet...",
    logs_fetch_error: "Error fetching logs.",
    src_ip: "Src IP",
    dest_ip: "Dest IP",

    status_title: "System Status",
    status_fetch_error: "Error fetching system status.",
    uptime: "Uptime",
    seconds: "seconds",
    free_heap: "Free Heap",
    bytes: "bytes",
    chip_revision: "Chip Revision",
    wifi_rssi: "WiFi Signal Strength",
    current_time: "Current Time",
    time_zone: "Time Zone",
    wifi_ip: "WiFi IP",
    eth_ip: "Ethernet IP",
    reboot_btn: "Reboot Device",
    rebooting_title: "Device is rebooting...",
    rebooting_hint: "Please wait a moment and refresh the page.",

    settings_title: "Settings",
    settings_fetch_error: "Error fetching settings.",
    device_number: "Device Number",
    site_id: "Site ID",
    site_id_hint: "Allowed characters: letters, numbers, dash (-), underscore (_)",
    enable_system_logs: "Enable System Logs",
    enable_http_logs: "Enable HTTP Logs",
    enable_lora_logs: "Enable LoRa Logs",
    save_btn: "Save Settings",
    invalid_device_number: "Invalid Device Number. Please enter a valid number.",
    invalid_site_id:
        "Invalid Site ID. Allowed characters: letters, numbers, dash (-), underscore (_).",

    lora_received: "Received LoRa message",
};

pub static ZH_DICT: Dict = Dict {
    app_title: "LoRa 网关",
    device_label: "设备",

    home_nav: "主页",
    logs_nav: "日志",
    status_nav: "状态",
    settings_nav: "设置",

    loading: "加载中...",
    close: "关闭",
    error_prefix: "错误",

    home_title: "发送 LoRa 消息",
    home_subtitle: "通过本网关广播",
    custom_message_label: "输入要发送的自定义 LoRa 消息：",
    custom_message_placeholder: "在此输入消息",
    send_custom_btn: "发送自定义消息",
    send_test_btn: "发送测试消息",

    logs_title: "连接与系统日志",
    logs_subtitle: "设备保存的最近记录",
    logs_empty: "暂无日志...",
    logs_fetch_error: "获取日志失败。",
    src_ip: "源 IP",
    dest_ip: "目标 IP",

    status_title: "系统状态",
    status_fetch_error: "获取系统状态失败。",
    uptime: "运行时间",
    seconds: "秒",
    free_heap: "可用堆内存",
    bytes: "字节",
    chip_revision: "芯片版本",
    wifi_rssi: "WiFi 信号强度",
    current_time: "当前时间",
    time_zone: "时区",
    wifi_ip: "WiFi IP",
    eth_ip: "以太网 IP",
    reboot_btn: "重启设备",
    rebooting_title: "设备正在重启...",
    rebooting_hint: "请稍候并刷新页面。",

    settings_title: "设置",
    settings_fetch_error: "获取设置失败。",
    device_number: "设备编号",
    site_id: "站点 ID",
    site_id_hint: "允许的字符：字母、数字、短横线 (-)、下划线 (_)",
    enable_system_logs: "启用系统日志",
    enable_http_logs: "启用 HTTP 日志",
    enable_lora_logs: "启用 LoRa 日志",
    save_btn: "保存设置",
    invalid_device_number: "设备编号无效，请输入数字。",
    invalid_site_id: "站点 ID 无效。允许的字符：字母、数字、短横线 (-)、下划线 (_)。",

    lora_received: "收到 LoRa 消息",
};

pub fn get_dict(lang: Language) -> &'static Dict {
    match lang {
        Language::En => &EN_DICT,
        Language::Zh => &ZH_DICT,
    }
}
