<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Theme toggle button (light/dark mode)</description>
   <name>btn_ThemeToggle</name>
   <tag></tag>
   <elementGuidId>common-theme-toggle</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//button[contains(@aria-label, 'theme') or contains(@aria-label, 'Toggle')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='theme-toggle'], button[aria-label*='theme']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
