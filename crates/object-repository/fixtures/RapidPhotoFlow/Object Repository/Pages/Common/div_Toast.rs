<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Toast notification message</description>
   <name>div_Toast</name>
   <tag></tag>
   <elementGuidId>common-toast</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//div[@role='alert' or contains(@class, 'toast') or contains(@class, 'notification')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[role='alert'], .toast, .notification, [data-testid='toast']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
